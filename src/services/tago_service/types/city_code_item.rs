use serde::{Deserialize, Serialize};

use super::serde_helpers::deserialize_text;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CityCodeItem {
    #[serde(deserialize_with = "deserialize_text")]
    pub citycode: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub cityname: String,
}

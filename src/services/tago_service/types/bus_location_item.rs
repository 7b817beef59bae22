use serde::{Deserialize, Serialize};

use super::serde_helpers::{
    deserialize_number, deserialize_option_integer, deserialize_option_text,
};

/// One entry of `getRouteAcctoBusLcList`. Which of `gpslati`/`gpslong`
/// holds the latitude is not reliable.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BusLocationItem {
    #[serde(deserialize_with = "deserialize_number")]
    pub gpslati: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub gpslong: f64,
    #[serde(default, deserialize_with = "deserialize_option_text")]
    pub routenm: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_text")]
    pub routetp: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_text")]
    pub nodenm: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_text")]
    pub nodeid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_integer")]
    pub nodeord: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_text")]
    pub vehicleno: Option<String>,
}

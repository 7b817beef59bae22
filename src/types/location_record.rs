use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub lat: f64,
    pub lng: f64,
    pub routenm: String,
    pub vehicleno: String,
    pub nodenm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodeid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodeord: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routetp: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CityCode {
    pub citycode: String,
    pub cityname: String,
}

use std::{str::FromStr, time::Duration};

use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use crate::types::{
    lat_lng::LatLng,
    location_record::{CityCode, LocationRecord},
};

use super::{
    types::{
        bus_location_item::BusLocationItem, city_code_item::CityCodeItem,
        tago_envelope::TagoEnvelope, tago_service_error::TagoServiceError,
    },
    xml_tree,
};

const BUS_LOCATION_SERVICE_PATH: &str = "/1613000/BusLcInfoInqireService";
const PAGE_SIZE: u32 = 100;
const PAGE_NO: u32 = 1;

/// Value of the `_type` parameter sent upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    fn as_param(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            other => Err(format!("Unknown response format: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TagoServiceConfig {
    pub host: String,
    pub service_key: Option<String>,
    pub response_format: ResponseFormat,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct TagoService {
    config: TagoServiceConfig,
    client: reqwest::Client,
}

pub struct BusLocationsInput {
    pub city_code: String,
    pub route_id: String,
}

impl TagoService {
    pub fn new(config: TagoServiceConfig) -> Result<Self, TagoServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn service_key(&self) -> Result<&str, TagoServiceError> {
        self.config
            .service_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(TagoServiceError::MissingServiceKey)
    }

    pub async fn get_bus_locations(
        &self,
        input: BusLocationsInput,
    ) -> Result<Vec<LocationRecord>, TagoServiceError> {
        let service_key = self.service_key()?;

        let query = format!(
            "cityCode={}&routeId={}&numOfRows={}&pageNo={}",
            encode(&input.city_code),
            encode(&input.route_id),
            PAGE_SIZE,
            PAGE_NO
        );

        let items: Vec<BusLocationItem> = self
            .request("getRouteAcctoBusLcList", service_key, &query)
            .await?;

        Ok(items.into_iter().map(to_location_record).collect())
    }

    pub async fn get_cities(&self) -> Result<Vec<CityCode>, TagoServiceError> {
        let service_key = self.service_key()?;

        let items: Vec<CityCodeItem> = self.request("getCtyCodeList", service_key, "").await?;

        Ok(items
            .into_iter()
            .map(|c| CityCode {
                citycode: c.citycode,
                cityname: c.cityname,
            })
            .collect())
    }

    /// Calls one operation of the bus location service and returns the
    /// normalized `response.body.items.item` list.
    async fn request<T>(
        &self,
        operation: &str,
        service_key: &str,
        query: &str,
    ) -> Result<Vec<T>, TagoServiceError>
    where
        T: DeserializeOwned,
    {
        let response_format = self.config.response_format;
        let base = format!(
            "{}{}/{}",
            self.config.host.trim_end_matches('/'),
            BUS_LOCATION_SERVICE_PATH,
            operation
        );
        debug!("Requesting {}?{}", base, query);

        // The portal issues keys already percent-encoded, so the key is not
        // encoded again.
        let mut url = format!(
            "{}?serviceKey={}&_type={}",
            base,
            service_key,
            response_format.as_param()
        );
        if !query.is_empty() {
            url.push('&');
            url.push_str(query);
        }

        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(TagoServiceError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        let tree: serde_json::Value = match response_format {
            ResponseFormat::Json => serde_json::from_str(&body)?,
            ResponseFormat::Xml => xml_tree::parse(&body)?,
        };

        let (header, items) = serde_json::from_value::<TagoEnvelope<T>>(tree)?.into_parts();

        if let Some(header) = header.filter(|h| !h.is_success()) {
            return Err(TagoServiceError::Rejected {
                code: header.result_code,
                message: header.result_msg,
            });
        }

        Ok(items.into())
    }
}

fn to_location_record(item: BusLocationItem) -> LocationRecord {
    let position = LatLng::disambiguate(item.gpslati, item.gpslong);

    debug!(
        node = item.nodenm.as_deref().unwrap_or_default(),
        gpslati = item.gpslati,
        gpslong = item.gpslong,
        lat = position.lat,
        lng = position.lng,
        "Resolved bus coordinates"
    );

    LocationRecord {
        lat: position.lat,
        lng: position.lng,
        routenm: item.routenm.unwrap_or_default(),
        vehicleno: item.vehicleno.unwrap_or_default(),
        nodenm: item.nodenm.unwrap_or_default(),
        nodeid: item.nodeid,
        nodeord: item.nodeord,
        routetp: item.routetp,
    }
}

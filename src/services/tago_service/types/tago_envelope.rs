use serde::{
    de::{DeserializeOwned, Error},
    Deserialize, Deserializer,
};
use serde_json::Value;

/// Result codes that still carry a usable (possibly empty) body.
const RESULT_CODE_NORMAL: &str = "00";
const RESULT_CODE_NO_DATA: &str = "03";

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct TagoEnvelope<T> {
    pub response: TagoResponse<T>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct TagoResponse<T> {
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub header: Option<TagoHeader>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub body: Option<TagoBody<T>>,
}

#[derive(Deserialize)]
pub struct TagoHeader {
    #[serde(rename = "resultCode", default)]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

impl TagoHeader {
    pub fn is_success(&self) -> bool {
        matches!(
            self.result_code.as_str(),
            RESULT_CODE_NORMAL | RESULT_CODE_NO_DATA | ""
        )
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct TagoBody<T> {
    #[serde(default)]
    pub items: TagoItems<T>,
}

/// `response.body.items.item` as TAGO encodes it: missing or blank when
/// nothing matched, a bare object for a single hit, an array otherwise.
#[derive(Debug, PartialEq)]
pub enum TagoItems<T> {
    Empty,
    Single(T),
    Many(Vec<T>),
}

impl<T> Default for TagoItems<T> {
    fn default() -> Self {
        TagoItems::Empty
    }
}

impl<T> From<TagoItems<T>> for Vec<T> {
    fn from(items: TagoItems<T>) -> Self {
        match items {
            TagoItems::Empty => Vec::new(),
            TagoItems::Single(item) => vec![item],
            TagoItems::Many(items) => items,
        }
    }
}

impl<T> TagoEnvelope<T> {
    /// Drops the envelope, yielding the header (if any) and the items.
    pub fn into_parts(self) -> (Option<TagoHeader>, TagoItems<T>) {
        let items = self
            .response
            .body
            .map(|body| body.items)
            .unwrap_or_default();

        (self.response.header, items)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Empty XML elements (`<body/>`) arrive as blank strings.
fn deserialize_blank_as_none<'de, D, B>(deserializer: D) -> Result<Option<B>, D::Error>
where
    D: Deserializer<'de>,
    B: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }

    serde_json::from_value(value).map(Some).map_err(Error::custom)
}

impl<'de, T> Deserialize<'de> for TagoItems<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Value::deserialize(deserializer)?;
        if is_blank(&items) {
            return Ok(TagoItems::Empty);
        }

        let mut items = match items {
            Value::Object(items) => items,
            other => return Err(Error::custom(format!("Unexpected items value: {}", other))),
        };

        match items.remove("item") {
            None => Ok(TagoItems::Empty),
            Some(item) if is_blank(&item) => Ok(TagoItems::Empty),
            Some(Value::Array(list)) => list
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
                .map(TagoItems::Many)
                .map_err(Error::custom),
            Some(item) => serde_json::from_value(item)
                .map(TagoItems::Single)
                .map_err(Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: u32,
    }

    fn parse(value: Value) -> TagoItems<Item> {
        let envelope: TagoEnvelope<Item> = serde_json::from_value(value).unwrap();
        envelope.into_parts().1
    }

    #[test]
    fn single_object_is_wrapped() {
        let items = parse(json!({
            "response": { "body": { "items": { "item": { "id": 1 } } } }
        }));

        assert_eq!(items, TagoItems::Single(Item { id: 1 }));
        assert_eq!(Vec::from(items), vec![Item { id: 1 }]);
    }

    #[test]
    fn array_is_kept_in_order() {
        let items = parse(json!({
            "response": { "body": { "items": { "item": [{ "id": 2 }, { "id": 1 }] } } }
        }));

        assert_eq!(Vec::from(items), vec![Item { id: 2 }, Item { id: 1 }]);
    }

    #[test]
    fn missing_or_blank_items_are_empty() {
        for value in [
            json!({ "response": {} }),
            json!({ "response": { "body": {} } }),
            json!({ "response": { "header": "", "body": "" } }),
            json!({ "response": { "body": { "items": "" } } }),
            json!({ "response": { "body": { "items": {} } } }),
            json!({ "response": { "body": { "items": { "item": "" } } } }),
        ] {
            assert_eq!(parse(value), TagoItems::Empty);
        }
    }

    #[test]
    fn malformed_item_is_an_error() {
        let result = serde_json::from_value::<TagoEnvelope<Item>>(json!({
            "response": { "body": { "items": { "item": { "id": "x" } } } }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn header_result_codes() {
        let header = |code: &str| TagoHeader {
            result_code: code.to_string(),
            result_msg: String::new(),
        };

        assert!(header("00").is_success());
        assert!(header("03").is_success());
        assert!(!header("30").is_success());
    }
}

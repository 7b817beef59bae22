//! Converts an XML document into the `serde_json::Value` tree TAGO would
//! have returned for `_type=json`, so both formats share one decoding path.
//!
//! Elements with children become objects keyed by child name, leaf elements
//! become their text, empty elements become `""` and repeated siblings are
//! collected into an array. Attributes are ignored; TAGO does not use them.

use quick_xml::{events::Event, Reader};
use serde_json::{Map, Value};

#[derive(thiserror::Error, Debug)]
pub enum XmlTreeError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid UTF-8 in element name: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Unbalanced element: {0}")]
    Unbalanced(String),
}

struct Element {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn new(name: String) -> Self {
        Element {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn insert(&mut self, name: String, value: Value) {
        match self.children.get_mut(&name) {
            Some(Value::Array(siblings)) => siblings.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.children.insert(name, value);
            }
        }
    }

    fn into_value(self) -> Value {
        if self.children.is_empty() {
            Value::String(self.text)
        } else {
            Value::Object(self.children)
        }
    }
}

pub fn parse(xml: &str) -> Result<Value, XmlTreeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Element::new(String::new())];

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = std::str::from_utf8(start.name().as_ref())?.to_string();
                stack.push(Element::new(name));
            }
            Event::Empty(empty) => {
                let name = std::str::from_utf8(empty.name().as_ref())?.to_string();
                if let Some(parent) = stack.last_mut() {
                    parent.insert(name, Value::String(String::new()));
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(XmlTreeError::Unbalanced("unexpected closing tag".to_string()));
                }
                if let (Some(element), Some(parent)) = (stack.pop(), stack.last_mut()) {
                    let name = element.name.clone();
                    parent.insert(name, element.into_value());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match stack.pop() {
        Some(document) if stack.is_empty() => Ok(Value::Object(document.children)),
        Some(unclosed) => Err(XmlTreeError::Unbalanced(unclosed.name)),
        None => Err(XmlTreeError::Unbalanced("empty document".to_string())),
    }
}

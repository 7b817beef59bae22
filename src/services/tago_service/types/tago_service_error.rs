use crate::services::tago_service::xml_tree::XmlTreeError;

#[derive(thiserror::Error, Debug)]
pub enum TagoServiceError {
    #[error("TAGO_SERVICE_KEY is not configured")]
    MissingServiceKey,

    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream responded with status {0}")]
    Status(u16),

    #[error("Upstream rejected the request: {code} {message}")]
    Rejected { code: String, message: String },

    #[error("Failed to parse response body: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TagoServiceError {
    fn from(value: serde_json::Error) -> Self {
        TagoServiceError::Parse(value.to_string())
    }
}

impl From<XmlTreeError> for TagoServiceError {
    fn from(value: XmlTreeError) -> Self {
        TagoServiceError::Parse(value.to_string())
    }
}

use reqwest::Error as ReqwestError;
use serde_json::Error as JsonError;
use std::fmt;
use strong_xml::XmlError;

/// Error geocoding. Nothing is retried, whatever failed is handed back as is.
#[derive(Debug)]
pub enum GeocodeError {
    /// Couldn't connect, timed out, or Google answered with a non 2xx status
    Http(ReqwestError),
    /// Body wasn't valid JSON
    Json(JsonError),
    /// Body wasn't the XML we expected
    Xml(XmlError),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Http(e) => write!(f, "request to geocoding api failed: {}", e),
            GeocodeError::Json(e) => write!(f, "could not parse json response: {}", e),
            GeocodeError::Xml(e) => write!(f, "could not parse xml response: {:?}", e),
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Http(e) => Some(e),
            GeocodeError::Json(e) => Some(e),
            GeocodeError::Xml(_) => None,
        }
    }
}

impl From<ReqwestError> for GeocodeError {
    fn from(re: ReqwestError) -> Self {
        Self::Http(re)
    }
}

impl From<JsonError> for GeocodeError {
    fn from(je: JsonError) -> Self {
        Self::Json(je)
    }
}

impl From<XmlError> for GeocodeError {
    fn from(xe: XmlError) -> Self {
        Self::Xml(xe)
    }
}

//! Decoding what comes back from Google.
//!
//! JSON is left as a [`serde_json::Value`], XML gets parsed into the typed tree below. The
//! XML layout is described [here](https://developers.google.com/maps/documentation/geocoding/requests-geocoding#GeocodingResponses).

use crate::error::GeocodeError;
use crate::request::Format;
use std::str::FromStr;
use strong_xml::XmlRead;

/// Top level `status` codes. `ZERO_RESULTS` is a perfectly fine answer, the rest of the
/// non OK codes mean the request or the key was bad.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Status {
    Ok,
    ZeroResults,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
}

impl Status {
    /// True when there won't be any usable results
    pub fn is_error(&self) -> bool {
        match self {
            Status::Ok | Status::ZeroResults => false,
            _ => true,
        }
    }
}

impl FromStr for Status {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // no glob import here, Status::Ok would shadow Result's Ok
        Ok(match s {
            "OK" => Status::Ok,
            "ZERO_RESULTS" => Status::ZeroResults,
            "OVER_DAILY_LIMIT" => Status::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Status::OverQueryLimit,
            "REQUEST_DENIED" => Status::RequestDenied,
            "INVALID_REQUEST" => Status::InvalidRequest,
            "UNKNOWN_ERROR" => Status::UnknownError,
            _ => return Err("status provided not valid"),
        })
    }
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "location")]
pub struct Location {
    #[xml(flatten_text = "lat")]
    pub lat: f64,
    #[xml(flatten_text = "lng")]
    pub lng: f64,
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "southwest")]
pub struct Southwest {
    #[xml(flatten_text = "lat")]
    pub lat: f64,
    #[xml(flatten_text = "lng")]
    pub lng: f64,
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "northeast")]
pub struct Northeast {
    #[xml(flatten_text = "lat")]
    pub lat: f64,
    #[xml(flatten_text = "lng")]
    pub lng: f64,
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "viewport")]
pub struct Viewport {
    #[xml(child = "southwest")]
    pub southwest: Southwest,
    #[xml(child = "northeast")]
    pub northeast: Northeast,
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "geometry")]
pub struct Geometry {
    #[xml(child = "location")]
    pub location: Location,
    /// `ROOFTOP`, `RANGE_INTERPOLATED`, `GEOMETRIC_CENTER` or `APPROXIMATE`
    #[xml(flatten_text = "location_type")]
    pub location_type: Option<String>,
    #[xml(child = "viewport")]
    pub viewport: Option<Viewport>,
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "address_component")]
pub struct AddressComponent {
    #[xml(flatten_text = "long_name")]
    pub long_name: String,
    #[xml(flatten_text = "short_name")]
    pub short_name: String,
    #[xml(flatten_text = "type")]
    pub types: Vec<String>,
}

#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "result")]
pub struct GeocodeResult {
    #[xml(flatten_text = "type")]
    pub types: Vec<String>,
    #[xml(flatten_text = "formatted_address")]
    pub formatted_address: Option<String>,
    #[xml(child = "address_component")]
    pub address_components: Vec<AddressComponent>,
    #[xml(child = "geometry")]
    pub geometry: Option<Geometry>,
    #[xml(flatten_text = "place_id")]
    pub place_id: Option<String>,
}

/// Parsed `<GeocodeResponse>` document.
#[derive(XmlRead, PartialEq, Debug)]
#[xml(tag = "GeocodeResponse")]
pub struct GeocodeResponse {
    /// Kept as sent, see [`GeocodeResponse::status`] for the parsed code.
    #[xml(flatten_text = "status")]
    pub status: String,
    #[xml(child = "result")]
    pub results: Vec<GeocodeResult>,
    #[xml(flatten_text = "error_message")]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Parsed top level status, `None` for codes we don't know about.
    pub fn status(&self) -> Option<Status> {
        self.status.parse().ok()
    }
}

/// What a geocode call hands back, depends on the format asked for and whether raw was
/// requested.
#[derive(Debug, PartialEq)]
pub enum Response {
    Raw(String),
    Json(serde_json::Value),
    Xml(GeocodeResponse),
}

impl Response {
    /// Turns a response body into a [`Response`]. With `raw` the body is passed through
    /// untouched, otherwise it has to parse as `format` or you get the parse error back.
    pub fn decode(body: String, format: Format, raw: bool) -> Result<Self, GeocodeError> {
        if raw {
            return Ok(Response::Raw(body));
        }
        trace!("decoding {} response", format);
        Ok(match format {
            Format::Json => Response::Json(serde_json::from_str(&body)?),
            Format::Xml => Response::Xml(GeocodeResponse::from_str(&body)?),
        })
    }

    /// Top level status, if the body was parsed and Google sent one we know about.
    pub fn status(&self) -> Option<Status> {
        match self {
            Response::Raw(_) => None,
            Response::Json(value) => value
                .get("status")
                .and_then(|s| s.as_str())
                .and_then(|s| s.parse().ok()),
            Response::Xml(doc) => doc.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_FIXTURE: &str = r#"{
        "results": [{
            "formatted_address": "400 Broad St, Seattle, WA 98109, USA",
            "geometry": {
                "location": { "lat": 47.6205063, "lng": -122.3492774 },
                "location_type": "ROOFTOP"
            },
            "place_id": "ChIJ-bfVTh8VkFQRDZLQnmioK9s",
            "types": ["establishment", "point_of_interest"]
        }],
        "status": "OK"
    }"#;

    const XML_FIXTURE: &str = r#"<GeocodeResponse>
 <status>OK</status>
 <result>
  <type>street_address</type>
  <formatted_address>277 Bedford Ave, Brooklyn, NY 11211, USA</formatted_address>
  <address_component>
   <long_name>277</long_name>
   <short_name>277</short_name>
   <type>street_number</type>
  </address_component>
  <address_component>
   <long_name>Brooklyn</long_name>
   <short_name>Brooklyn</short_name>
   <type>political</type>
   <type>sublocality</type>
  </address_component>
  <geometry>
   <location>
    <lat>40.7142205</lat>
    <lng>-73.9612903</lng>
   </location>
   <location_type>ROOFTOP</location_type>
   <viewport>
    <southwest>
     <lat>40.7128715</lat>
     <lng>-73.9626393</lng>
    </southwest>
    <northeast>
     <lat>40.7155695</lat>
     <lng>-73.9599413</lng>
    </northeast>
   </viewport>
  </geometry>
  <place_id>ChIJd8BlQ2BZwokRAFUEcm_qrcA</place_id>
 </result>
</GeocodeResponse>"#;

    #[test]
    fn raw_is_untouched() {
        let body = "not even close to json".to_string();
        assert_eq!(
            Response::decode(body.clone(), Format::Json, true).unwrap(),
            Response::Raw(body)
        );
    }

    #[test]
    fn json_matches_serde() {
        let direct: serde_json::Value = serde_json::from_str(JSON_FIXTURE).unwrap();
        let decoded = Response::decode(JSON_FIXTURE.to_string(), Format::Json, false).unwrap();
        assert_eq!(decoded, Response::Json(direct));
        assert_eq!(decoded.status(), Some(Status::Ok));
    }

    #[test]
    fn bad_json_is_an_error() {
        match Response::decode("{\"status\":".to_string(), Format::Json, false) {
            Err(GeocodeError::Json(_)) => {}
            other => panic!("expected json error, got {:?}", other),
        }
    }

    #[test]
    fn xml_tree() {
        let decoded = Response::decode(XML_FIXTURE.to_string(), Format::Xml, false).unwrap();
        let doc = match decoded {
            Response::Xml(doc) => doc,
            other => panic!("expected xml, got {:?}", other),
        };
        assert_eq!(doc.status, "OK");
        assert_eq!(doc.status(), Some(Status::Ok));
        assert_eq!(doc.results.len(), 1);

        let result = &doc.results[0];
        assert_eq!(result.types, vec!["street_address".to_string()]);
        assert_eq!(
            result.formatted_address.as_deref(),
            Some("277 Bedford Ave, Brooklyn, NY 11211, USA")
        );
        assert_eq!(result.address_components.len(), 2);
        assert_eq!(result.address_components[1].long_name, "Brooklyn");
        assert_eq!(
            result.address_components[1].types,
            vec!["political".to_string(), "sublocality".to_string()]
        );

        let geometry = result.geometry.as_ref().unwrap();
        assert_eq!(geometry.location, Location { lat: 40.7142205, lng: -73.9612903 });
        assert_eq!(geometry.location_type.as_deref(), Some("ROOFTOP"));
        let viewport = geometry.viewport.as_ref().unwrap();
        assert_eq!(viewport.southwest.lat, 40.7128715);
        assert_eq!(viewport.northeast.lng, -73.9599413);
        assert_eq!(result.place_id.as_deref(), Some("ChIJd8BlQ2BZwokRAFUEcm_qrcA"));
    }

    #[test]
    fn xml_error_status() {
        let body = "<GeocodeResponse><status>REQUEST_DENIED</status>\
                    <error_message>The provided API key is invalid.</error_message>\
                    </GeocodeResponse>";
        let decoded = Response::decode(body.to_string(), Format::Xml, false).unwrap();
        let status = decoded.status().unwrap();
        assert_eq!(status, Status::RequestDenied);
        assert!(status.is_error());
        match decoded {
            Response::Xml(doc) => {
                assert!(doc.results.is_empty());
                assert_eq!(
                    doc.error_message.as_deref(),
                    Some("The provided API key is invalid.")
                );
            }
            other => panic!("expected xml, got {:?}", other),
        }
    }

    #[test]
    fn unknown_status_is_not_a_decode_error() {
        let xml = "<GeocodeResponse><status>SOMETHING_NEW</status></GeocodeResponse>";
        let decoded = Response::decode(xml.to_string(), Format::Xml, false).unwrap();
        assert_eq!(decoded.status(), None);
        match &decoded {
            Response::Xml(doc) => assert_eq!(doc.status, "SOMETHING_NEW"),
            other => panic!("expected xml, got {:?}", other),
        }

        let json = r#"{"results":[],"status":"SOMETHING_NEW"}"#;
        let decoded = Response::decode(json.to_string(), Format::Json, false).unwrap();
        assert_eq!(decoded.status(), None);
    }

    #[test]
    fn bad_xml_is_an_error() {
        match Response::decode("<GeocodeResponse><status>".to_string(), Format::Xml, false) {
            Err(GeocodeError::Xml(_)) => {}
            other => panic!("expected xml error, got {:?}", other),
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!("ZERO_RESULTS".parse::<Status>(), Ok(Status::ZeroResults));
        assert!(!Status::ZeroResults.is_error());
        assert!(Status::OverQueryLimit.is_error());
        assert!("NOPE".parse::<Status>().is_err());

        let raw = Response::Raw("{\"status\":\"OK\"}".to_string());
        assert_eq!(raw.status(), None);
    }
}

//! Everything needed to turn a geocoding request into the URL Google expects.
//!
//! Parameter names follow the [Geocoding API docs](https://developers.google.com/maps/documentation/geocoding/requests-geocoding)
//! and must not change, they are the wire contract.

use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Base of every request URL, the format segment and query get tacked on the end.
pub const GEOCODE_BASE_URL: &'static str = "https://maps.googleapis.com/maps/api/geocode/";

/// Output format Google should answer in. Ends up as the last path segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Json
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err("format must be json or xml"),
        }
    }
}

/// A latitude/longitude pair in degrees. Zero is a real place (equator, prime meridian),
/// so presence is always tracked with `Option<LatLng>`, never by value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Renders as `lat,lng`, which is what both `latlng` and each half of `bounds` want.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// One geocoding request. Build it up, then hand it to a [`Geocoder`](crate::Geocoder)
/// or just call [`request_url`](GeocodeRequest::request_url) yourself.
///
/// ```
/// use mapsgeocode::{Format, GeocodeRequest};
///
/// let req = GeocodeRequest::address("1600 Amphitheatre Parkway, Mountain View, CA")
///     .region("us")
///     .format(Format::Xml);
/// assert_eq!(
///     req.query_string(),
///     "address=1600+Amphitheatre+Parkway%2C+Mountain+View%2C+CA&region=us"
/// );
/// ```
///
/// Nothing is validated here. An address wins over coordinates if both are set, and
/// a bounds box missing either corner is left out entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeocodeRequest {
    address: Option<String>,
    coordinates: Option<LatLng>,
    southwest: Option<LatLng>,
    northeast: Option<LatLng>,
    region: Option<String>,
    language: Option<String>,
    result_types: Vec<String>,
    location_types: Vec<String>,
    api_key: Option<String>,
    format: Format,
}

impl GeocodeRequest {
    /// Empty request, JSON output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward geocode an address.
    pub fn address<S: Into<String>>(address: S) -> Self {
        Self::new().with_address(address)
    }

    /// Reverse geocode a point.
    pub fn reverse(lat: f64, lng: f64) -> Self {
        Self::new().with_coordinates(LatLng::new(lat, lng))
    }

    pub fn with_address<S: Into<String>>(mut self, address: S) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_coordinates<P: Into<LatLng>>(mut self, point: P) -> Self {
        self.coordinates = Some(point.into());
        self
    }

    /// Sets both corners of the viewport bias box.
    pub fn bounds<P: Into<LatLng>>(self, southwest: P, northeast: P) -> Self {
        self.southwest(southwest).northeast(northeast)
    }

    pub fn southwest<P: Into<LatLng>>(mut self, point: P) -> Self {
        self.southwest = Some(point.into());
        self
    }

    pub fn northeast<P: Into<LatLng>>(mut self, point: P) -> Self {
        self.northeast = Some(point.into());
        self
    }

    /// Two character ccTLD to bias results towards, e.g. `"es"`.
    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Appends one address type filter, e.g. `"street_address"`.
    pub fn result_type<S: Into<String>>(mut self, result_type: S) -> Self {
        self.result_types.push(result_type.into());
        self
    }

    /// Replaces all address type filters.
    pub fn result_types<I, S>(mut self, result_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.result_types = result_types.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one location type filter, e.g. `"ROOFTOP"`.
    pub fn location_type<S: Into<String>>(mut self, location_type: S) -> Self {
        self.location_types.push(location_type.into());
        self
    }

    /// Replaces all location type filters.
    pub fn location_types<I, S>(mut self, location_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location_types = location_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Address as given, even if empty.
    pub fn get_address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Point to reverse geocode. Only sent when there's no address.
    pub fn get_coordinates(&self) -> Option<LatLng> {
        self.coordinates
    }

    /// Both corners, or nothing. A half set box doesn't count.
    pub fn get_bounds(&self) -> Option<(LatLng, LatLng)> {
        match (self.southwest, self.northeast) {
            (Some(sw), Some(ne)) => Some((sw, ne)),
            _ => None,
        }
    }

    /// ccTLD region bias.
    pub fn get_region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn get_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Address type filters in the order added, empty means unset.
    pub fn get_result_types(&self) -> &[String] {
        &self.result_types
    }

    /// Location type filters in the order added, empty means unset.
    pub fn get_location_types(&self) -> &[String] {
        &self.location_types
    }

    pub fn get_api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Format segment the URL will use, JSON unless changed.
    pub fn get_format(&self) -> Format {
        self.format
    }

    /// Key/value pairs in wire order with unset and empty values already dropped.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let location = match (self.address.as_deref(), self.coordinates) {
            (Some(address), _) if !address.is_empty() => Some(("address", address.to_string())),
            (_, Some(point)) => Some(("latlng", point.to_string())),
            _ => None,
        };
        let bounds = self
            .get_bounds()
            .map(|(sw, ne)| ("bounds", format!("{}|{}", sw, ne)));

        let pairs = vec![
            location,
            bounds,
            self.region.clone().map(|v| ("region", v)),
            self.language.clone().map(|v| ("language", v)),
            Some(("result_type", self.result_types.join("|"))),
            Some(("location_type", self.location_types.join("|"))),
            // key always goes last
            self.api_key.clone().map(|v| ("key", v)),
        ];

        pairs
            .into_iter()
            .flatten()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Appends the query to `target`. Anything already in `target` counts as prefix, so the
    /// first pair never gets a leading `&`.
    fn serialize_into(&self, target: String) -> String {
        let start = target.len();
        let mut serializer = form_urlencoded::Serializer::for_suffix(target, start);
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// The url encoded query, no leading `?`. Key order is fixed so output is reproducible.
    pub fn query_string(&self) -> String {
        self.serialize_into(String::new())
    }

    /// `base_url` + format + `?` + query.
    pub fn request_url(&self, base_url: &str) -> String {
        self.serialize_into(format!("{}{}?", base_url, self.format))
    }
}

/// Same as [`GeocodeRequest::request_url`] but with an explicit format that overrides the
/// one stored on the request.
pub fn request_url(base_url: &str, format: Format, request: &GeocodeRequest) -> String {
    request.serialize_into(format!("{}{}?", base_url, format))
}

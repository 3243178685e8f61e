//! Build and send requests to the [Google Geocoding API](https://developers.google.com/maps/documentation/geocoding/overview).
//! Meant to be super simple: describe the request, get back JSON, an XML tree, or the raw body.
//!
//! There's also [`bounding_box`], a quick approximation of "everything within N miles" that
//! doesn't touch the network at all.
//!
//! Note that fetching needs [`tokio`](https://crates.io/crates/tokio), as [`reqwest`](https://crates.io/crates/reqwest) needs `tokio`!

#[macro_use]
extern crate log;

mod bounds;
mod error;
mod request;
mod response;

pub use crate::bounds::{bounding_box, AxisBounds, BoundingBox, MILES_PER_DEGREE};
pub use crate::error::GeocodeError;
pub use crate::request::{request_url, Format, GeocodeRequest, LatLng, GEOCODE_BASE_URL};
pub use crate::response::{
    AddressComponent, GeocodeResponse, GeocodeResult, Geometry, Location, Northeast, Response,
    Southwest, Status, Viewport,
};

use std::future::Future;

/// Sends geocoding requests. Holds on to a `reqwest::Client` so connections get reused.
#[derive(Clone, Debug)]
pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder {
    /// Talks to Google, default client, no timeout.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: GEOCODE_BASE_URL.to_string(),
        }
    }

    /// Point at something other than Google, e.g. a proxy or a local test server.
    /// Should end in a `/`, the format segment is appended directly.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bring your own client, e.g. one built with a timeout.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Where requests go, format segment not included.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_url(&self, request: &GeocodeRequest) -> String {
        request.request_url(&self.base_url)
    }

    /// One attempt, parsed as whatever format the request asked for.
    pub async fn geocode(&self, request: &GeocodeRequest) -> Result<Response, GeocodeError> {
        let client = &self.client;
        geocode_with(request, &self.base_url, false, move |url| fetch(client, url)).await
    }

    /// One attempt, body handed back exactly as Google sent it.
    pub async fn geocode_raw(&self, request: &GeocodeRequest) -> Result<String, GeocodeError> {
        let url = self.request_url(request);
        debug!("URL to GET from geocoding api {}", url);
        fetch(&self.client, url).await
    }
}

async fn fetch(client: &reqwest::Client, url: String) -> Result<String, GeocodeError> {
    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

/// Builds the URL, hands it to `fetch` exactly once, and decodes what comes back.
///
/// `fetch` is whatever gets a body for a URL. [`Geocoder`] plugs in `reqwest`, but anything
/// with the same shape works:
///
/// ```
/// # async fn run() -> Result<(), mapsgeocode::GeocodeError> {
/// use mapsgeocode::{geocode_with, GeocodeRequest, Response, GEOCODE_BASE_URL};
///
/// let req = GeocodeRequest::address("Seattle");
/// let res = geocode_with(&req, GEOCODE_BASE_URL, false, |_url| async {
///     Ok(r#"{"results":[],"status":"ZERO_RESULTS"}"#.to_string())
/// })
/// .await?;
/// assert!(matches!(res, Response::Json(_)));
/// # Ok(())
/// # }
/// ```
pub async fn geocode_with<F, Fut>(
    request: &GeocodeRequest,
    base_url: &str,
    raw: bool,
    fetch: F,
) -> Result<Response, GeocodeError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, GeocodeError>>,
{
    let url = request.request_url(base_url);
    debug!("URL to GET from geocoding api {}", url);

    let raw_string = fetch(url).await?;
    debug!("raw string from geocoding api {}", raw_string);

    Response::decode(raw_string, request.get_format(), raw)
}

/// Single request against Google with a fresh default [`Geocoder`].
pub async fn get(request: &GeocodeRequest) -> Result<Response, GeocodeError> {
    Geocoder::new().geocode(request).await
}

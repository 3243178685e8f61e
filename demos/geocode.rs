use mapsgeocode::{bounding_box, Format, GeocodeRequest};

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut request = GeocodeRequest::address("400 Broad St, Seattle, WA 98109").region("us");
    if let Ok(key) = std::env::var("GOOGLE_MAPS_API_KEY") {
        request = request.api_key(key);
    }

    // Space Needle's Address
    println!("{:#?}", mapsgeocode::get(&request).await);
    println!("{:#?}", mapsgeocode::get(&request.format(Format::Xml)).await);

    // Roughly everything within a mile of it
    println!("{:#?}", bounding_box(47.6205063, -122.3492774, 1.0));
}

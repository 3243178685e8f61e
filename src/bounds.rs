//! Quick and dirty bounding box around a point, good for "everything within N miles"
//! prefilters where a real great circle check would be too slow.

/// Miles per degree of latitude. Treated as constant everywhere, which it isn't quite.
pub const MILES_PER_DEGREE: f64 = 69.172;

/// Max/min along one axis, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisBounds {
    pub max: f64,
    pub min: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub lat: AxisBounds,
    pub lon: AxisBounds,
}

/// Box around (`latitude`, `longitude`) that roughly contains every point within `miles`.
///
/// Only the longitude axis gets the earth curvature correction, and it is computed at the
/// box's southern edge rather than at the center. Poles aren't guarded, `cos` goes to zero
/// there and so does any meaning in the result.
pub fn bounding_box(latitude: f64, longitude: f64, miles: f64) -> BoundingBox {
    let lat_max = latitude + miles / MILES_PER_DEGREE;
    let lat_min = latitude - (lat_max - latitude);
    let lon_max =
        longitude + miles / ((lat_min * std::f64::consts::PI / 180.0).cos() * MILES_PER_DEGREE);
    let lon_min = longitude - (lon_max - longitude);

    BoundingBox {
        lat: AxisBounds {
            max: lat_max,
            min: lat_min,
        },
        lon: AxisBounds {
            max: lon_max,
            min: lon_min,
        },
    }
}

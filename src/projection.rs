//! Conversion of (longitude, latitude) coordinates to (X, Y) meters.

use crate::geometry::{Point, Ring, lower_left_point, polygon_area};

/// Conversion factors between meters and degrees of longitude/latitude.
///
/// The factors follow the WGS84 radii of the earth at the equator and poles.
///
/// # Arguments
///
/// * `origin_lon_lat` - (longitude, latitude) of the scene origin in degrees
///
/// # Returns
///
/// `(meters_to_lon, meters_to_lat)`: meters spanned by one degree of
/// longitude and latitude at the origin latitude.
pub fn meters_to_lon_lat_factors(origin_lon_lat: Point) -> (f64, f64) {
    let equator_rad = 6378137.0;
    let pole_rad = 6356752.314;

    let lat = origin_lon_lat[1].to_radians();

    let d = (equator_rad * equator_rad * lat.sin() * lat.sin()
        + pole_rad * pole_rad * lat.cos() * lat.cos())
    .sqrt();
    let r = (equator_rad * pole_rad) / d; // earth radius at this latitude
    let meters_to_lat = (std::f64::consts::PI * r * 2.0) / 360.0;
    let meters_to_lon = meters_to_lat * lat.cos();

    (meters_to_lon, meters_to_lat)
}

/// Projects a polygon ring of (longitude, latitude) vertices onto (X, Y)
/// coordinates in meters.
///
/// A single conversion factor is used for the whole ring, which stays
/// reasonably accurate for polygons up to roughly 100 km across. When
/// `origin_lon_lat` is `None` the scene origin defaults to the lower left
/// corner of the ring's bounding box.
pub fn lon_lat_to_polygon(ring: &[Point], origin_lon_lat: Option<Point>) -> Ring {
    if ring.is_empty() {
        return Vec::new();
    }
    let origin = origin_lon_lat.unwrap_or_else(|| lower_left_point(ring));
    let (meters_to_lon, meters_to_lat) = meters_to_lon_lat_factors(origin);
    ring.iter()
        .map(|pt| {
            [
                (pt[0] - origin[0]) * meters_to_lon,
                (pt[1] - origin[1]) * meters_to_lat,
            ]
        })
        .collect()
}

/// Area in square meters of a polygon ring given in (longitude, latitude).
pub fn polygon_area_m2(ring: &[Point]) -> f64 {
    polygon_area(&lon_lat_to_polygon(ring, None)).abs()
}

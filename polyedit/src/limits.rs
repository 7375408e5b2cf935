// Bounds enforced by the strict (`try_*`) entry points only.

pub const MAX_POINTS: usize = 10_000;
pub const MAX_POLYGONS: usize = 1_000;

pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
pub const LNG_MIN: f64 = -180.0;
pub const LNG_MAX: f64 = 180.0;

#[inline]
pub fn in_lat_bounds(v: f64) -> bool { v.is_finite() && v >= LAT_MIN && v <= LAT_MAX }

#[inline]
pub fn in_lng_bounds(v: f64) -> bool { v.is_finite() && v >= LNG_MIN && v <= LNG_MAX }

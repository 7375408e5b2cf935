use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(p: [f64; 2]) -> LatLng {
        LatLng { lat: p[0], lng: p[1] }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> LatLng {
        LatLng { lat, lng }
    }
}

/// Accepts either `[lat, lng]` or `{ "lat": .., "lng": .. }` when reading seeds.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub enum PointRepr {
    Pair([f64; 2]),
    Object(LatLng),
}

impl From<PointRepr> for LatLng {
    fn from(p: PointRepr) -> LatLng {
        match p {
            PointRepr::Pair(pair) => pair.into(),
            PointRepr::Object(ll) => ll,
        }
    }
}

pub const DEFAULT_COLOR: &str = "red";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for PolygonStyle {
    fn default() -> Self {
        PolygonStyle { color: default_color() }
    }
}

pub fn to_pairs(points: &[LatLng]) -> Vec<[f64; 2]> {
    points.iter().map(|p| p.to_pair()).collect()
}

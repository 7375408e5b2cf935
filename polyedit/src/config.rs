use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EditError;
use crate::limits;
use crate::model::{LatLng, PointRepr, PolygonStyle};

pub const DEFAULT_BRIDGE_METHOD: &str = "setPolygons";

/// Seed values the host substitutes into the page when it builds it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default, deserialize_with = "de_points")]
    pub points: Vec<LatLng>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub style: PolygonStyle,
    #[serde(default = "default_bridge_method")]
    pub bridge_method: String,
}

fn default_enabled() -> bool { true }

fn default_bridge_method() -> String { DEFAULT_BRIDGE_METHOD.to_string() }

fn de_points<'de, D>(d: D) -> Result<Vec<LatLng>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<PointRepr> = Vec::deserialize(d)?;
    Ok(raw.into_iter().map(LatLng::from).collect())
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            points: Vec::new(),
            enabled: default_enabled(),
            style: PolygonStyle::default(),
            bridge_method: default_bridge_method(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(text: &str) -> Result<EditorConfig, EditError> {
        let v: Value = serde_json::from_str(text)?;
        EditorConfig::from_json_value(v)
    }

    pub fn from_json_value(v: Value) -> Result<EditorConfig, EditError> {
        let cfg: EditorConfig = serde_json::from_value(v)?;
        if cfg.points.len() > limits::MAX_POINTS {
            return Err(EditError::TooManyPoints { max: limits::MAX_POINTS });
        }
        Ok(cfg)
    }

    /// Builds a config from the two literals the host substitutes into the
    /// page: a point list such as `[[48.1, 11.5], [48.2, 11.6]]` and
    /// `true`/`false`.
    pub fn from_seed(points_literal: &str, enabled_literal: &str) -> Result<EditorConfig, EditError> {
        let raw: Vec<PointRepr> = serde_json::from_str(points_literal.trim())?;
        let enabled = match enabled_literal.trim() {
            "true" | "True" => true,
            "false" | "False" => false,
            other => return Err(EditError::Config(format!("invalid enabled flag '{}'", other))),
        };
        let points: Vec<LatLng> = raw.into_iter().map(LatLng::from).collect();
        if points.len() > limits::MAX_POINTS {
            return Err(EditError::TooManyPoints { max: limits::MAX_POINTS });
        }
        Ok(EditorConfig { points, enabled, ..EditorConfig::default() })
    }
}

pub mod config;
pub mod editor;
pub mod error;
pub mod keys;
pub mod limits;
pub mod model;
pub mod overpass;
pub mod set;
pub mod surface;

pub use config::EditorConfig;
pub use editor::PolygonEditor;
pub use error::EditError;
pub use keys::KeyChord;
pub use model::{LatLng, PolygonStyle};
pub use set::{Mode, PolygonSet, SetSnapshot};
pub use surface::{HostBridge, MapSurface};

use crate::model::{LatLng, PolygonStyle};

/// The map the editor draws on. Implementations own the rendering library.
pub trait MapSurface {
    type Overlay;

    /// Builds a polygon overlay from `points` (vertex order) and attaches it.
    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> Self::Overlay;

    /// Detaches an overlay previously returned by `add_polygon`.
    fn remove_overlay(&mut self, overlay: Self::Overlay);
}

/// Outbound channel to the native host. Delivery is best-effort.
pub trait HostBridge {
    fn set_polygons(&self, points: &[LatLng]);
}

impl<F: Fn(&[LatLng])> HostBridge for F {
    fn set_polygons(&self, points: &[LatLng]) {
        self(points)
    }
}

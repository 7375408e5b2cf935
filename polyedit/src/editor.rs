//! Single-polygon editor: an ordered point list kept in sync with one overlay.
//!
//! Every mutation is followed by a full re-render (old overlay removed, new
//! one added) and, when a host bridge is attached, a push of the whole list.

use log::debug;

use crate::config::EditorConfig;
use crate::error::{check_point, EditError};
use crate::keys::KeyChord;
use crate::model::{to_pairs, LatLng, PolygonStyle};
use crate::surface::{HostBridge, MapSurface};

pub struct PolygonEditor<M: MapSurface> {
    map: M,
    bridge: Option<Box<dyn HostBridge>>,
    points: Vec<LatLng>,
    overlay: Option<M::Overlay>,
    enabled: bool,
    style: PolygonStyle,
}

impl<M: MapSurface> PolygonEditor<M> {
    /// Seeds the editor and draws the initial polygon. Coordinates are taken as-is.
    pub fn new(map: M, points: Vec<LatLng>, enabled: bool) -> PolygonEditor<M> {
        let mut ed = PolygonEditor {
            map,
            bridge: None,
            points,
            overlay: None,
            enabled,
            style: PolygonStyle::default(),
        };
        ed.render();
        ed
    }

    pub fn from_config(map: M, cfg: EditorConfig) -> PolygonEditor<M> {
        let mut ed = PolygonEditor {
            map,
            bridge: None,
            points: cfg.points,
            overlay: None,
            enabled: cfg.enabled,
            style: cfg.style,
        };
        ed.render();
        ed
    }

    pub fn with_bridge(mut self, bridge: Box<dyn HostBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn set_bridge(&mut self, bridge: Option<Box<dyn HostBridge>>) {
        self.bridge = bridge;
    }

    pub fn has_bridge(&self) -> bool { self.bridge.is_some() }

    /// Replaces points and flag, then redraws. The host is not notified: it
    /// supplied these values.
    pub fn initialize(&mut self, points: Vec<LatLng>, enabled: bool) {
        self.points = points;
        self.enabled = enabled;
        self.render();
    }

    pub fn set_style(&mut self, style: PolygonStyle) {
        self.style = style;
        self.render();
    }

    pub fn style(&self) -> &PolygonStyle { &self.style }

    /// Appends a vertex when editing is enabled. Returns whether it was added.
    pub fn handle_click(&mut self, p: LatLng) -> bool {
        if !self.enabled {
            debug!("click ignored, editing disabled");
            return false;
        }
        self.points.push(p);
        debug!("point added ({}, {}), {} total", p.lat, p.lng, self.points.len());
        self.render();
        self.notify();
        true
    }

    /// Like `handle_click` but rejects non-finite, out-of-range or excess
    /// points without touching state. `Ok(false)` means editing is disabled,
    /// whatever the point.
    pub fn try_handle_click(&mut self, p: LatLng) -> Result<bool, EditError> {
        if !self.enabled {
            return Ok(false);
        }
        check_point(p, self.points.len())?;
        Ok(self.handle_click(p))
    }

    /// Removes the most recent vertex. Empty list is a no-op.
    pub fn undo(&mut self) -> Option<LatLng> {
        let removed = self.points.pop()?;
        debug!("undo, {} points left", self.points.len());
        self.render();
        self.notify();
        Some(removed)
    }

    /// Runs `undo` for Ctrl+Z / Cmd+Z. Returns whether the chord was consumed.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        if !chord.is_undo() {
            return false;
        }
        self.undo();
        true
    }

    /// Drops every vertex and the overlay. The enabled flag is kept.
    pub fn clear(&mut self) {
        self.points.clear();
        if let Some(o) = self.overlay.take() {
            self.map.remove_overlay(o);
        }
        debug!("polygon cleared");
        self.notify();
    }

    pub fn enable_editing(&mut self) { self.enabled = true; }

    pub fn disable_editing(&mut self) { self.enabled = false; }

    pub fn is_editing_enabled(&self) -> bool { self.enabled }

    /// Snapshot of the vertices in drawing order.
    pub fn points(&self) -> Vec<LatLng> { self.points.clone() }

    pub fn pairs(&self) -> Vec<[f64; 2]> { to_pairs(&self.points) }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn has_overlay(&self) -> bool { self.overlay.is_some() }

    pub fn map(&self) -> &M { &self.map }

    /// Removes the live overlay and hands back the map.
    pub fn into_map(mut self) -> M {
        if let Some(o) = self.overlay.take() {
            self.map.remove_overlay(o);
        }
        self.map
    }

    fn render(&mut self) {
        if let Some(o) = self.overlay.take() {
            self.map.remove_overlay(o);
        }
        self.overlay = Some(self.map.add_polygon(&self.points, &self.style));
    }

    fn notify(&self) {
        if let Some(b) = &self.bridge {
            b.set_polygons(&self.points);
        }
    }
}

//! Several polygons edited on one map, one at a time, plus a separate
//! "manual mode" polygon. Only the active polygon is drawn.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{check_point, EditError};
use crate::keys::KeyChord;
use crate::limits;
use crate::model::{to_pairs, LatLng, PolygonStyle};
use crate::surface::{HostBridge, MapSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Interactive,
    Manual,
}

struct Slot<O> {
    points: Vec<LatLng>,
    enabled: bool,
    overlay: Option<O>,
}

impl<O> Slot<O> {
    fn empty() -> Self {
        Slot { points: Vec::new(), enabled: false, overlay: None }
    }
}

/// Full state of a set, as exchanged with the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetSnapshot {
    pub current: Option<usize>,
    pub polygons: Vec<Vec<[f64; 2]>>,
    pub enabled: Vec<bool>,
    #[serde(default)]
    pub manual: Vec<[f64; 2]>,
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

fn default_interactive() -> bool { true }

pub struct PolygonSet<M: MapSurface> {
    map: M,
    bridge: Option<Box<dyn HostBridge>>,
    slots: Vec<Slot<M::Overlay>>,
    current: Option<usize>,
    manual: Slot<M::Overlay>,
    mode: Mode,
    style: PolygonStyle,
}

impl<M: MapSurface> PolygonSet<M> {
    /// One empty, disabled polygon selected, interactive mode.
    pub fn new(map: M) -> PolygonSet<M> {
        PolygonSet {
            map,
            bridge: None,
            slots: vec![Slot::empty()],
            current: Some(0),
            manual: Slot::empty(),
            mode: Mode::Interactive,
            style: PolygonStyle::default(),
        }
    }

    pub fn with_bridge(mut self, bridge: Box<dyn HostBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn with_style(mut self, style: PolygonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn mode(&self) -> Mode { self.mode }

    pub fn current(&self) -> Option<usize> { self.current }

    pub fn polygon_count(&self) -> usize { self.slots.len() }

    pub fn handle_click(&mut self, p: LatLng) -> bool {
        match self.mode {
            Mode::Manual => self.manual.points.push(p),
            Mode::Interactive => match self.current.and_then(|i| self.slots.get_mut(i)) {
                Some(slot) if slot.enabled => slot.points.push(p),
                _ => return false,
            },
        }
        self.render_active();
        self.notify();
        true
    }

    /// `Ok(false)` when the current slot is missing or disabled, before any
    /// validation of `p`.
    pub fn try_handle_click(&mut self, p: LatLng) -> Result<bool, EditError> {
        let len = match self.mode {
            Mode::Manual => self.manual.points.len(),
            Mode::Interactive => match self.current.and_then(|i| self.slots.get(i)) {
                Some(slot) if slot.enabled => slot.points.len(),
                _ => return Ok(false),
            },
        };
        check_point(p, len)?;
        Ok(self.handle_click(p))
    }

    pub fn undo(&mut self) -> Option<LatLng> {
        let removed = self.active_slot_mut()?.points.pop()?;
        self.render_active();
        self.notify();
        Some(removed)
    }

    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        if !chord.is_undo() {
            return false;
        }
        self.undo();
        true
    }

    /// Empties the active polygon and removes its overlay.
    pub fn clear(&mut self) {
        let Some(slot) = self.active_slot_mut() else { return };
        slot.points.clear();
        let overlay = slot.overlay.take();
        if let Some(o) = overlay {
            self.map.remove_overlay(o);
        }
        self.notify();
    }

    /// Appends an empty, disabled polygon and returns its index.
    pub fn add_polygon(&mut self) -> usize {
        self.slots.push(Slot::empty());
        if self.current.is_none() {
            self.current = Some(0);
        }
        self.slots.len() - 1
    }

    pub fn try_add_polygon(&mut self) -> Result<usize, EditError> {
        if self.slots.len() >= limits::MAX_POLYGONS {
            return Err(EditError::TooManyPolygons { max: limits::MAX_POLYGONS });
        }
        Ok(self.add_polygon())
    }

    /// Switches the current polygon, hiding the previous one.
    pub fn select(&mut self, index: usize) -> Result<(), EditError> {
        if index >= self.slots.len() {
            return Err(EditError::InvalidIndex { index, count: self.slots.len() });
        }
        if let Some(o) = self.current.and_then(|i| self.slots[i].overlay.take()) {
            self.map.remove_overlay(o);
        }
        self.current = Some(index);
        debug!("current polygon -> {}", index);
        if self.mode == Mode::Interactive {
            self.render_active();
        }
        Ok(())
    }

    /// Drops the current polygon. Selection moves back one when the last
    /// polygon was removed.
    pub fn remove_current(&mut self) -> Option<Vec<LatLng>> {
        let idx = self.current?;
        let mut slot = self.slots.remove(idx);
        if let Some(o) = slot.overlay.take() {
            self.map.remove_overlay(o);
        }
        if self.slots.is_empty() {
            self.current = None;
        } else if idx == self.slots.len() {
            self.current = Some(idx - 1);
        }
        debug!("removed polygon {}, {} left", idx, self.slots.len());
        Some(slot.points)
    }

    pub fn enable_current(&mut self) {
        if let Some(slot) = self.current.and_then(|i| self.slots.get_mut(i)) {
            slot.enabled = true;
        }
    }

    pub fn disable_current(&mut self) {
        if let Some(slot) = self.current.and_then(|i| self.slots.get_mut(i)) {
            slot.enabled = false;
        }
    }

    pub fn is_current_enabled(&self) -> bool {
        self.current.and_then(|i| self.slots.get(i)).map_or(false, |s| s.enabled)
    }

    /// Toggles interactive/manual mode, swapping which polygon is drawn.
    pub fn switch_mode(&mut self) {
        if let Some(o) = self.active_slot_mut().and_then(|s| s.overlay.take()) {
            self.map.remove_overlay(o);
        }
        self.mode = match self.mode {
            Mode::Interactive => Mode::Manual,
            Mode::Manual => Mode::Interactive,
        };
        debug!("mode -> {:?}", self.mode);
        self.render_active();
    }

    pub fn active_points(&self) -> Option<&[LatLng]> {
        match self.mode {
            Mode::Manual => Some(&self.manual.points),
            Mode::Interactive => self.current.and_then(|i| self.slots.get(i)).map(|s| s.points.as_slice()),
        }
    }

    pub fn polygon(&self, index: usize) -> Option<Vec<LatLng>> {
        self.slots.get(index).map(|s| s.points.clone())
    }

    pub fn manual_points(&self) -> Vec<LatLng> { self.manual.points.clone() }

    pub fn snapshot(&self) -> SetSnapshot {
        SetSnapshot {
            current: self.current,
            polygons: self.slots.iter().map(|s| to_pairs(&s.points)).collect(),
            enabled: self.slots.iter().map(|s| s.enabled).collect(),
            manual: to_pairs(&self.manual.points),
            interactive: self.mode == Mode::Interactive,
        }
    }

    /// Replaces the whole state with `snap` and draws the active polygon.
    /// Missing `enabled` entries default to disabled.
    pub fn restore(&mut self, snap: SetSnapshot) -> Result<(), EditError> {
        let count = snap.polygons.len();
        if let Some(c) = snap.current {
            if c >= count {
                return Err(EditError::InvalidIndex { index: c, count });
            }
        }
        self.remove_all_overlays();
        self.slots = snap
            .polygons
            .into_iter()
            .enumerate()
            .map(|(i, pts)| Slot {
                points: pts.into_iter().map(LatLng::from).collect(),
                enabled: snap.enabled.get(i).copied().unwrap_or(false),
                overlay: None,
            })
            .collect();
        self.manual = Slot {
            points: snap.manual.into_iter().map(LatLng::from).collect(),
            enabled: true,
            overlay: None,
        };
        self.current = snap.current;
        self.mode = if snap.interactive { Mode::Interactive } else { Mode::Manual };
        self.render_active();
        Ok(())
    }

    pub fn map(&self) -> &M { &self.map }

    pub fn has_overlay(&self) -> bool {
        self.manual.overlay.is_some() || self.slots.iter().any(|s| s.overlay.is_some())
    }

    pub fn into_map(mut self) -> M {
        self.remove_all_overlays();
        self.map
    }

    fn remove_all_overlays(&mut self) {
        for slot in self.slots.iter_mut().chain(std::iter::once(&mut self.manual)) {
            if let Some(o) = slot.overlay.take() {
                self.map.remove_overlay(o);
            }
        }
    }

    fn active_slot_mut(&mut self) -> Option<&mut Slot<M::Overlay>> {
        match self.mode {
            Mode::Manual => Some(&mut self.manual),
            Mode::Interactive => self.current.and_then(|i| self.slots.get_mut(i)),
        }
    }

    fn render_active(&mut self) {
        let slot = match self.mode {
            Mode::Manual => &mut self.manual,
            Mode::Interactive => match self.current.and_then(|i| self.slots.get_mut(i)) {
                Some(s) => s,
                None => return,
            },
        };
        if let Some(o) = slot.overlay.take() {
            self.map.remove_overlay(o);
        }
        slot.overlay = Some(self.map.add_polygon(&slot.points, &self.style));
    }

    fn notify(&self) {
        if let (Some(b), Some(points)) = (&self.bridge, self.active_points()) {
            b.set_polygons(points);
        }
    }
}

#![allow(dead_code)]

use polyedit::{HostBridge, LatLng, MapSurface, PolygonStyle};
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory map: overlays are ids, the live set is tracked.
#[derive(Default)]
pub struct RecordingMap {
    next_id: u32,
    pub live: Vec<(u32, Vec<LatLng>)>,
    pub added: usize,
    pub removed: usize,
    pub last_color: Option<String>,
}

impl RecordingMap {
    pub fn live_points(&self) -> Option<&[LatLng]> {
        self.live.last().map(|(_, p)| p.as_slice())
    }
}

impl MapSurface for RecordingMap {
    type Overlay = u32;

    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push((id, points.to_vec()));
        self.added += 1;
        self.last_color = Some(style.color.clone());
        id
    }

    fn remove_overlay(&mut self, overlay: u32) {
        let before = self.live.len();
        self.live.retain(|(id, _)| *id != overlay);
        assert_eq!(before, self.live.len() + 1, "removed unknown overlay {}", overlay);
        self.removed += 1;
    }
}

pub type Calls = Rc<RefCell<Vec<Vec<LatLng>>>>;

pub fn recording_bridge() -> (Box<dyn HostBridge>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let bridge = move |pts: &[LatLng]| sink.borrow_mut().push(pts.to_vec());
    (Box::new(bridge), calls)
}

pub fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod api;
mod bridge;
mod error;
mod events;
mod interop;
mod leaflet;
pub mod logging;

pub use leaflet::LeafletMap;

pub(crate) type SharedEditor = Rc<RefCell<polyedit::PolygonEditor<LeafletMap>>>;
pub(crate) type SharedSet = Rc<RefCell<polyedit::PolygonSet<LeafletMap>>>;

/// Single-polygon editor bound to a Leaflet map.
#[wasm_bindgen]
pub struct PolygonEditor {
    pub(crate) inner: SharedEditor,
    pub(crate) listeners: Option<events::Listeners>,
}

/// Multi-polygon editor with a manual-mode polygon.
#[wasm_bindgen]
pub struct PolygonSet {
    pub(crate) inner: SharedSet,
    pub(crate) listeners: Option<events::Listeners>,
}

impl PolygonEditor {
    pub fn rs_wrap(inner: polyedit::PolygonEditor<LeafletMap>) -> PolygonEditor {
        PolygonEditor { inner: Rc::new(RefCell::new(inner)), listeners: None }
    }
    pub fn rs_points(&self) -> Vec<polyedit::LatLng> { self.inner.borrow().points() }
}

impl PolygonSet {
    pub fn rs_wrap(inner: polyedit::PolygonSet<LeafletMap>) -> PolygonSet {
        PolygonSet { inner: Rc::new(RefCell::new(inner)), listeners: None }
    }
    pub fn rs_snapshot(&self) -> polyedit::SetSnapshot { self.inner.borrow().snapshot() }
}

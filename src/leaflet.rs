// Leaflet bindings: just the calls the editor makes.

use crate::interop::{new_obj, pairs_array, set_kv};
use js_sys::Function;
use polyedit::{LatLng, MapSurface, PolygonStyle};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    pub type Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &Map, event: &str, handler: &Function);

    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    pub type Polygon;

    #[wasm_bindgen(js_namespace = L, js_name = polygon)]
    fn new_polygon(latlngs: &JsValue, options: &JsValue) -> Polygon;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Polygon, map: &Map);

    #[wasm_bindgen(method, js_name = removeFrom)]
    fn remove_from(this: &Polygon, map: &Map);
}

/// A Leaflet map as seen by the editor.
pub struct LeafletMap {
    map: Map,
}

impl LeafletMap {
    pub fn new(map: Map) -> LeafletMap { LeafletMap { map } }

    pub fn raw(&self) -> &Map { &self.map }
}

impl MapSurface for LeafletMap {
    type Overlay = Polygon;

    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> Polygon {
        let opts = new_obj();
        set_kv(&opts, "color", &JsValue::from_str(&style.color));
        let poly = new_polygon(&pairs_array(points).into(), &opts.into());
        poly.add_to(&self.map);
        poly
    }

    fn remove_overlay(&mut self, overlay: Polygon) {
        overlay.remove_from(&self.map);
    }
}

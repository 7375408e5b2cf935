use crate::bridge::ChannelBridge;
use crate::events::{chord, Listeners};
use crate::leaflet::Map;
use crate::{error, interop, LeafletMap, PolygonEditor, PolygonSet};
use log::{debug, warn};
use polyedit::config::DEFAULT_BRIDGE_METHOD;
use polyedit::{EditorConfig, LatLng};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

const EDITOR: &str = "editor";
const SET: &str = "polygon set";

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn bridge_from(target: JsValue, method: Option<String>) -> Option<Box<dyn polyedit::HostBridge>> {
    if target.is_null() || target.is_undefined() {
        return None;
    }
    let method = method.unwrap_or_else(|| DEFAULT_BRIDGE_METHOD.to_string());
    Some(Box::new(ChannelBridge::new(target, method)))
}

fn undo_value(p: Option<LatLng>) -> JsValue {
    p.map_or(JsValue::NULL, interop::pair)
}

// Host callbacks run while the core is mutably borrowed, so a call coming back
// through JS must not panic: a wasm32 panic leaves the borrow flag set for good.
fn read<'a, T>(cell: &'a RefCell<T>, what: &str) -> Option<Ref<'a, T>> {
    match cell.try_borrow() {
        Ok(r) => Some(r),
        Err(_) => {
            warn!("{} busy, read ignored", what);
            None
        }
    }
}

fn write<'a, T>(cell: &'a RefCell<T>, what: &str) -> Option<RefMut<'a, T>> {
    match cell.try_borrow_mut() {
        Ok(r) => Some(r),
        Err(_) => {
            warn!("{} busy, call ignored", what);
            None
        }
    }
}

#[wasm_bindgen]
impl PolygonEditor {
    /// `points` may be null, `[[lat, lng], ...]` or `[{lat, lng}, ...]`.
    #[wasm_bindgen(constructor)]
    pub fn new(map: JsValue, points: JsValue, enabled: bool) -> Result<PolygonEditor, JsValue> {
        let points = interop::points_from_js(points).map_err(error::throwable)?;
        let surface = LeafletMap::new(map.unchecked_into::<Map>());
        Ok(PolygonEditor::rs_wrap(polyedit::PolygonEditor::new(surface, points, enabled)))
    }

    /// Builds from a config object `{points, enabled, style: {color}, bridge_method}`.
    /// `bridge` may be null for the browser-only variant.
    pub fn from_config(map: JsValue, config: JsValue, bridge: JsValue) -> Result<PolygonEditor, JsValue> {
        let cfg = match serde_wasm_bindgen::from_value::<serde_json::Value>(config) {
            Ok(v) => EditorConfig::from_json_value(v).map_err(error::throwable)?,
            Err(e) => return Err(error::throwable(e)),
        };
        let method = cfg.bridge_method.clone();
        let surface = LeafletMap::new(map.unchecked_into::<Map>());
        let mut inner = polyedit::PolygonEditor::from_config(surface, cfg);
        inner.set_bridge(bridge_from(bridge, Some(method)));
        Ok(PolygonEditor::rs_wrap(inner))
    }

    /// Builds from the two literals the host substitutes into the page.
    pub fn from_seed(map: JsValue, points_literal: &str, enabled_literal: &str) -> Result<PolygonEditor, JsValue> {
        let cfg = EditorConfig::from_seed(points_literal, enabled_literal).map_err(error::throwable)?;
        let surface = LeafletMap::new(map.unchecked_into::<Map>());
        Ok(PolygonEditor::rs_wrap(polyedit::PolygonEditor::from_config(surface, cfg)))
    }

    /// Attaches (or with null, detaches) the host channel object.
    pub fn set_bridge(&mut self, bridge: JsValue, method: Option<String>) {
        if let Some(mut ed) = write(&self.inner, EDITOR) {
            ed.set_bridge(bridge_from(bridge, method));
        }
    }

    pub fn has_bridge(&self) -> bool { read(&self.inner, EDITOR).map_or(false, |ed| ed.has_bridge()) }

    /// Starts listening to map clicks and Ctrl/Cmd+Z. Idempotent.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_some() {
            return Ok(());
        }
        let map = match read(&self.inner, EDITOR) {
            Some(ed) => ed.map().raw().clone(),
            None => return Err(error::throwable("editor busy")),
        };
        let on_click = Rc::clone(&self.inner);
        let on_key = Rc::clone(&self.inner);
        let listeners = Listeners::install(
            &map,
            move |p| match on_click.try_borrow_mut() {
                Ok(mut ed) => { ed.handle_click(p); }
                Err(_) => warn!("click dropped, editor busy"),
            },
            move |c| match on_key.try_borrow_mut() {
                Ok(mut ed) => { ed.handle_key(&c); }
                Err(_) => warn!("key dropped, editor busy"),
            },
        )?;
        self.listeners = Some(listeners);
        debug!("editor attached");
        Ok(())
    }

    pub fn detach(&mut self) {
        if self.listeners.take().is_some() {
            debug!("editor detached");
        }
    }

    pub fn is_attached(&self) -> bool { self.listeners.is_some() }

    /// Detaches and removes the overlay from the map. The JS object is
    /// unusable afterwards.
    pub fn dispose(mut self) {
        self.listeners = None;
        if let Ok(cell) = Rc::try_unwrap(self.inner) {
            let _ = cell.into_inner().into_map();
        }
    }

    pub fn initialize(&mut self, points: JsValue, enabled: bool) -> JsValue {
        let pts = match interop::points_from_js(points) {
            Ok(pts) => pts,
            Err(e) => return error::bad_input("points", e),
        };
        match write(&self.inner, EDITOR) {
            Some(mut ed) => {
                ed.initialize(pts, enabled);
                error::ok(JsValue::TRUE)
            }
            None => error::busy(EDITOR),
        }
    }

    pub fn handle_click(&mut self, lat: f64, lng: f64) -> bool {
        write(&self.inner, EDITOR).map_or(false, |mut ed| ed.handle_click(LatLng::new(lat, lng)))
    }
    pub fn handle_click_res(&mut self, lat: f64, lng: f64) -> JsValue {
        let Some(mut ed) = write(&self.inner, EDITOR) else { return error::busy(EDITOR) };
        match ed.try_handle_click(LatLng::new(lat, lng)) {
            Ok(added) => error::ok(JsValue::from_bool(added)),
            Err(e) => error::edit(&e),
        }
    }
    /// Returns the removed `[lat, lng]`, or null when there was nothing to undo.
    pub fn undo(&mut self) -> JsValue {
        undo_value(write(&self.inner, EDITOR).and_then(|mut ed| ed.undo()))
    }
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        write(&self.inner, EDITOR).map_or(false, |mut ed| ed.handle_key(&chord(event)))
    }
    pub fn clear(&mut self) {
        if let Some(mut ed) = write(&self.inner, EDITOR) {
            ed.clear();
        }
    }
    pub fn enable_editing(&mut self) {
        if let Some(mut ed) = write(&self.inner, EDITOR) {
            ed.enable_editing();
        }
    }
    pub fn disable_editing(&mut self) {
        if let Some(mut ed) = write(&self.inner, EDITOR) {
            ed.disable_editing();
        }
    }
    pub fn is_editing_enabled(&self) -> bool {
        read(&self.inner, EDITOR).map_or(false, |ed| ed.is_editing_enabled())
    }
    /// Fresh `[[lat, lng], ...]` array; mutating it does not affect the editor.
    /// Null while the editor is busy notifying the host.
    pub fn get_points(&self) -> JsValue {
        read(&self.inner, EDITOR).map_or(JsValue::NULL, |ed| interop::pairs_array(&ed.points()).into())
    }
    pub fn point_count(&self) -> u32 {
        read(&self.inner, EDITOR).map_or(0, |ed| ed.len() as u32)
    }
    pub fn set_color(&mut self, color: &str) {
        if let Some(mut ed) = write(&self.inner, EDITOR) {
            ed.set_style(polyedit::PolygonStyle { color: color.to_string() });
        }
    }
    /// Overpass QL `(poly:"...")` filter for the current polygon, or undefined when empty.
    pub fn poly_filter(&self) -> Option<String> {
        read(&self.inner, EDITOR).and_then(|ed| polyedit::overpass::poly_filter(&ed.points()))
    }
}

#[wasm_bindgen]
impl PolygonSet {
    #[wasm_bindgen(constructor)]
    pub fn new(map: JsValue, bridge: JsValue) -> PolygonSet {
        let surface = LeafletMap::new(map.unchecked_into::<Map>());
        let mut inner = polyedit::PolygonSet::new(surface);
        if let Some(b) = bridge_from(bridge, None) {
            inner = inner.with_bridge(b);
        }
        PolygonSet::rs_wrap(inner)
    }

    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_some() {
            return Ok(());
        }
        let map = match read(&self.inner, SET) {
            Some(set) => set.map().raw().clone(),
            None => return Err(error::throwable("polygon set busy")),
        };
        let on_click = Rc::clone(&self.inner);
        let on_key = Rc::clone(&self.inner);
        let listeners = Listeners::install(
            &map,
            move |p| match on_click.try_borrow_mut() {
                Ok(mut set) => { set.handle_click(p); }
                Err(_) => warn!("click dropped, set busy"),
            },
            move |c| match on_key.try_borrow_mut() {
                Ok(mut set) => { set.handle_key(&c); }
                Err(_) => warn!("key dropped, set busy"),
            },
        )?;
        self.listeners = Some(listeners);
        Ok(())
    }

    pub fn detach(&mut self) {
        self.listeners = None;
    }

    pub fn dispose(mut self) {
        self.listeners = None;
        if let Ok(cell) = Rc::try_unwrap(self.inner) {
            let _ = cell.into_inner().into_map();
        }
    }

    pub fn handle_click(&mut self, lat: f64, lng: f64) -> bool {
        write(&self.inner, SET).map_or(false, |mut set| set.handle_click(LatLng::new(lat, lng)))
    }
    pub fn handle_click_res(&mut self, lat: f64, lng: f64) -> JsValue {
        let Some(mut set) = write(&self.inner, SET) else { return error::busy(SET) };
        match set.try_handle_click(LatLng::new(lat, lng)) {
            Ok(added) => error::ok(JsValue::from_bool(added)),
            Err(e) => error::edit(&e),
        }
    }
    pub fn undo(&mut self) -> JsValue {
        undo_value(write(&self.inner, SET).and_then(|mut set| set.undo()))
    }
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        write(&self.inner, SET).map_or(false, |mut set| set.handle_key(&chord(event)))
    }
    pub fn clear(&mut self) {
        if let Some(mut set) = write(&self.inner, SET) {
            set.clear();
        }
    }

    /// Index of the new polygon; `u32::MAX` when the set is busy.
    pub fn add_polygon(&mut self) -> u32 {
        write(&self.inner, SET).map_or(u32::MAX, |mut set| set.add_polygon() as u32)
    }
    pub fn add_polygon_res(&mut self) -> JsValue {
        let Some(mut set) = write(&self.inner, SET) else { return error::busy(SET) };
        match set.try_add_polygon() {
            Ok(i) => error::ok(JsValue::from_f64(i as f64)),
            Err(e) => error::edit(&e),
        }
    }
    pub fn select(&mut self, index: u32) -> bool {
        write(&self.inner, SET).map_or(false, |mut set| set.select(index as usize).is_ok())
    }
    pub fn select_res(&mut self, index: u32) -> JsValue {
        let Some(mut set) = write(&self.inner, SET) else { return error::busy(SET) };
        match set.select(index as usize) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::edit(&e),
        }
    }
    /// Removes the current polygon and returns its points, or null if none is selected.
    pub fn remove_current(&mut self) -> JsValue {
        match write(&self.inner, SET).and_then(|mut set| set.remove_current()) {
            Some(pts) => interop::pairs_array(&pts).into(),
            None => JsValue::NULL,
        }
    }
    pub fn current(&self) -> Option<u32> {
        read(&self.inner, SET).and_then(|set| set.current()).map(|i| i as u32)
    }
    pub fn polygon_count(&self) -> u32 {
        read(&self.inner, SET).map_or(0, |set| set.polygon_count() as u32)
    }
    pub fn enable_current(&mut self) {
        if let Some(mut set) = write(&self.inner, SET) {
            set.enable_current();
        }
    }
    pub fn disable_current(&mut self) {
        if let Some(mut set) = write(&self.inner, SET) {
            set.disable_current();
        }
    }
    pub fn is_current_enabled(&self) -> bool {
        read(&self.inner, SET).map_or(false, |set| set.is_current_enabled())
    }
    pub fn switch_mode(&mut self) {
        if let Some(mut set) = write(&self.inner, SET) {
            set.switch_mode();
        }
    }
    pub fn is_interactive(&self) -> bool {
        read(&self.inner, SET).map_or(false, |set| set.mode() == polyedit::Mode::Interactive)
    }
    pub fn get_active_points(&self) -> JsValue {
        let Some(set) = read(&self.inner, SET) else { return JsValue::NULL };
        match set.active_points() {
            Some(pts) => interop::pairs_array(pts).into(),
            None => JsValue::NULL,
        }
    }
    /// `{current, polygons, enabled, manual, interactive}`, or null while busy.
    pub fn get_polygons(&self) -> JsValue {
        let Some(set) = read(&self.inner, SET) else { return JsValue::NULL };
        serde_wasm_bindgen::to_value(&set.snapshot()).unwrap_or(JsValue::NULL)
    }
    pub fn set_polygons(&mut self, snapshot: JsValue) -> JsValue {
        let snap = match serde_wasm_bindgen::from_value::<polyedit::SetSnapshot>(snapshot) {
            Ok(s) => s,
            Err(e) => return error::bad_input("snapshot", e),
        };
        let Some(mut set) = write(&self.inner, SET) else { return error::busy(SET) };
        match set.restore(snap) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::edit(&e),
        }
    }
    pub fn poly_filter(&self) -> Option<String> {
        let set = read(&self.inner, SET)?;
        set.active_points().and_then(polyedit::overpass::poly_filter)
    }
}

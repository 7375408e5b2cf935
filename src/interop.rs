use js_sys::{Array, Object, Reflect};
use polyedit::model::PointRepr;
use polyedit::LatLng;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

fn get_f64(obj: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_f64()
}

/// `[[lat, lng], ...]`, the shape Leaflet and `get_points` use.
pub fn pairs_array(points: &[LatLng]) -> Array {
    points
        .iter()
        .map(|p| {
            let pair = Array::new_with_length(2);
            pair.set(0, JsValue::from_f64(p.lat));
            pair.set(1, JsValue::from_f64(p.lng));
            JsValue::from(pair)
        })
        .collect()
}

/// `[{lat, lng}, ...]`, the shape the host slot reads.
pub fn latlng_objects(points: &[LatLng]) -> Array {
    points
        .iter()
        .map(|p| {
            let o = new_obj();
            set_kv(&o, "lat", &JsValue::from_f64(p.lat));
            set_kv(&o, "lng", &JsValue::from_f64(p.lng));
            JsValue::from(o)
        })
        .collect()
}

pub fn pair(p: LatLng) -> JsValue {
    pairs_array(&[p]).get(0)
}

/// Reads `e.latlng` from a map mouse event.
pub fn event_latlng(ev: &JsValue) -> Option<LatLng> {
    let ll = Reflect::get(ev, &JsValue::from_str("latlng")).ok()?;
    Some(LatLng::new(get_f64(&ll, "lat")?, get_f64(&ll, "lng")?))
}

/// Accepts `null`/`undefined` (empty), `[[lat, lng], ...]` or `[{lat, lng}, ...]`.
pub fn points_from_js(v: JsValue) -> Result<Vec<LatLng>, serde_wasm_bindgen::Error> {
    if v.is_null() || v.is_undefined() {
        return Ok(Vec::new());
    }
    let raw: Vec<PointRepr> = serde_wasm_bindgen::from_value(v)?;
    Ok(raw.into_iter().map(LatLng::from).collect())
}

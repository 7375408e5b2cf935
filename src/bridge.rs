use crate::interop::latlng_objects;
use js_sys::{Function, Reflect};
use log::warn;
use polyedit::{HostBridge, LatLng};
use wasm_bindgen::{JsCast, JsValue};

/// An object published over the host's web channel. Each push calls
/// `target[method]([{lat, lng}, ...])` and ignores the result.
pub struct ChannelBridge {
    target: JsValue,
    method: String,
}

impl ChannelBridge {
    pub fn new(target: JsValue, method: impl Into<String>) -> ChannelBridge {
        ChannelBridge { target, method: method.into() }
    }

    fn call(&self, points: &[LatLng]) -> Result<(), JsValue> {
        let f: Function = Reflect::get(&self.target, &JsValue::from_str(&self.method))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a function"))?;
        f.call1(&self.target, &latlng_objects(points).into())?;
        Ok(())
    }
}

impl HostBridge for ChannelBridge {
    fn set_polygons(&self, points: &[LatLng]) {
        if let Err(e) = self.call(points) {
            warn!("host bridge {}() failed: {:?}", self.method, e);
        }
    }
}

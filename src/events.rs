use crate::interop::event_latlng;
use crate::leaflet::Map;
use polyedit::{KeyChord, LatLng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Map click and document key-down handlers, unregistered on drop.
pub struct Listeners {
    map: Map,
    document: Document,
    click: Closure<dyn FnMut(JsValue)>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

pub fn chord(ev: &KeyboardEvent) -> KeyChord {
    KeyChord::new(ev.key(), ev.key_code(), ev.ctrl_key(), ev.meta_key())
}

impl Listeners {
    pub fn install(
        map: &Map,
        mut on_click: impl FnMut(LatLng) + 'static,
        mut on_key: impl FnMut(KeyChord) + 'static,
    ) -> Result<Listeners, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let click = Closure::wrap(Box::new(move |ev: JsValue| {
            if let Some(p) = event_latlng(&ev) {
                on_click(p);
            }
        }) as Box<dyn FnMut(JsValue)>);
        let keydown = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            on_key(chord(&ev));
        }) as Box<dyn FnMut(KeyboardEvent)>);

        document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        map.on("click", click.as_ref().unchecked_ref());
        Ok(Listeners { map: map.clone(), document, click, keydown })
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.map.off("click", self.click.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
    }
}

use crate::interop::{new_obj, set_kv};
use polyedit::EditError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn edit(e: &EditError) -> JsValue {
    let d = new_obj();
    let data = match e {
        EditError::NonFinite(param) => {
            set_kv(&d, "param", &JsValue::from_str(param));
            Some(d.into())
        }
        EditError::OutOfRange { param, min, max, got } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "min", &JsValue::from_f64(*min));
            set_kv(&d, "max", &JsValue::from_f64(*max));
            set_kv(&d, "got", &JsValue::from_f64(*got));
            Some(d.into())
        }
        EditError::TooManyPoints { max } | EditError::TooManyPolygons { max } => {
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            Some(d.into())
        }
        EditError::InvalidIndex { index, count } => {
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            set_kv(&d, "count", &JsValue::from_f64(*count as f64));
            Some(d.into())
        }
        EditError::Config(_) => None,
    };
    err(e.code(), e.to_string(), data)
}

/// A call arrived while `what` was still handling another one, typically from
/// inside a host callback.
pub fn busy(what: &str) -> JsValue {
    err("busy", format!("{} is handling another call", what), None)
}

#[inline]
pub fn bad_input(param: &str, e: impl std::fmt::Display) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("bad_input", format!("{}: {}", param, e), Some(d.into()))
}

/// Exception value for constructors, which throw instead of returning an envelope.
pub fn throwable(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

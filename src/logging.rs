use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

/// `None` means "off". Unknown names fall back to warn.
fn parse_level(level: &str) -> Option<Level> {
    match level.to_ascii_lowercase().as_str() {
        "off" => None,
        "error" => Some(Level::Error),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => Some(Level::Warn),
    }
}

/// Routes `log` output to the browser console. Throws if a logger is
/// already installed; "off" only silences output and never throws.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let Some(level) = parse_level(level) else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    console_log::init_with_level(level)
        .map_err(|e| JsValue::from_str(&format!("failed to init logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("off"), None);
        assert_eq!(parse_level("nonsense"), Some(Level::Warn));
    }
}

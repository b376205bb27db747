// ============================================================================
// HISTORY - window.location / window.history
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::window;

/// Pathname actual (sin query ni hash)
pub fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Nueva entrada en el historial
pub fn push_path(path: &str) -> Result<(), JsValue> {
    history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Reemplazar la entrada actual (redirecciones / paths normalizados)
pub fn replace_path(path: &str) -> Result<(), JsValue> {
    history()?.replace_state_with_url(&JsValue::NULL, "", Some(path))
}

fn history() -> Result<web_sys::History, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()
}

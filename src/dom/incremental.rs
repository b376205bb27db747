// ============================================================================
// INCREMENTAL DOM UPDATES - Solo actualiza el subárbol que cambió
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, mount, replace_element};
use crate::state::AppState;
use crate::views::shared::mobile_menu::{render_mobile_menu, MOBILE_MENU_ID};

/// Resultado de una actualización incremental
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementalOutcome {
    Applied,
    /// El elemento objetivo no existe, hace falta re-render completo
    NeedsFullRender,
}

/// Re-montar el menú móvil en su lugar
pub fn update_mobile_menu_incremental(state: &AppState) -> Result<IncrementalOutcome, JsValue> {
    let Some(current) = get_element_by_id(MOBILE_MENU_ID) else {
        log::warn!("⚠️ [MENU-UPDATE] #{} no encontrado en el DOM", MOBILE_MENU_ID);
        return Ok(IncrementalOutcome::NeedsFullRender);
    };

    let fresh = mount(&render_mobile_menu(state))?;
    replace_element(&current, &fresh)?;
    log::debug!("✅ [MENU-UPDATE] Menú móvil actualizado (open={})", state.menu.is_open());
    Ok(IncrementalOutcome::Applied)
}

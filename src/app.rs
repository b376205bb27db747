// ============================================================================
// APP - Aplicación principal (estado + raíz montada)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{
    append_child, get_element_by_id, install_click_delegation, mount, set_document_title,
    set_inner_html,
};
use crate::dom::incremental::{update_mobile_menu_incremental, IncrementalOutcome};
use crate::models::Route;
use crate::router::{self, Resolution};
use crate::state::{AppState, IncrementalUpdate};
use crate::utils::history;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear la aplicación a partir de la URL actual
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;
        install_click_delegation(&root)?;

        let path = history::current_path().unwrap_or_else(|| Route::Home.path().to_string());
        let route = sync_location(&path)?;
        log::info!("📍 [APP] Ruta inicial: {} ({})", route.path(), path);

        Ok(Self {
            state: AppState::new(route),
            root,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-render completo dentro de #app
    pub fn render(&mut self) -> Result<(), JsValue> {
        let started = js_sys::Date::now();
        let route = self.state.current_route();

        let tree = render_app(&self.state);
        let mounted = mount(&tree)?;
        set_inner_html(&self.root, "");
        append_child(&self.root, &mounted)?;
        set_document_title(&CONFIG.document_title(route.title()));

        log::debug!(
            "✅ [RENDER] {} renderizada en {:.1} ms",
            route.path(),
            js_sys::Date::now() - started
        );
        Ok(())
    }

    /// Actualización incremental; NeedsFullRender si falta el subárbol
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<IncrementalOutcome, JsValue> {
        match update {
            IncrementalUpdate::MobileMenu => update_mobile_menu_incremental(&self.state),
        }
    }
}

/// Resolver el path y corregir la barra de direcciones si hace falta
pub fn sync_location(path: &str) -> Result<Route, JsValue> {
    let resolution = router::resolve(path);
    let route = resolution.route();

    if let Resolution::Redirect { from, to } = &resolution {
        log::warn!("⚠️ [ROUTER] Path desconocido '{}', redirigiendo a {}", from, to.path());
    }
    if resolution.needs_replace() {
        history::replace_path(route.path())?;
    }
    Ok(route)
}

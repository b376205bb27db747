// ============================================================================
// STUDENT ACHIEVEMENT PORTAL - SITIO INFORMATIVO (RUST PURO + WASM)
// ============================================================================
// - Models: tablas de contenido estático
// - Views: funciones que construyen el árbol de marcado (sin lógica)
// - ViewModels: aplican acciones sobre el estado
// - State: Rc<RefCell> (ruta actual + menú móvil)
// - DOM: montaje en web_sys + actualizaciones incrementales
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
pub mod state;
pub mod viewmodels;
pub mod dom;
pub mod charts;
pub mod views;
pub mod utils;
pub mod app;

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::app::App;
use crate::config::CONFIG;
use crate::dom::IncrementalOutcome;
use crate::state::{Action, UpdateType};
use crate::utils::history;
use crate::viewmodels::SiteViewModel;

// Instancia global de la app (un solo hilo)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.effective_log_level()));
    log::info!("🚀 {} - iniciando", CONFIG.brand);
    log::debug!("⚙️ [CONFIG] {}", CONFIG.to_json());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward del navegador: se registra una sola vez
    dom::on_popstate(|_e| on_location_change())?;

    Ok(())
}

/// Punto único de entrada de los eventos del DOM
pub fn dispatch(action: Action) {
    let update = APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .map(|app| SiteViewModel::new().handle(app.state(), action))
    });

    let Some(update) = update else {
        log::warn!("⚠️ [DISPATCH] App no está inicializada, acción ignorada: {:?}", action);
        return;
    };

    if let Action::Navigate(route) = action {
        if history::current_path().as_deref() != Some(route.path()) {
            if let Err(e) = history::push_path(route.path()) {
                log::error!("❌ [NAV] Error en pushState: {:?}", e);
            }
        }
    }

    rerender_app_with_type(update);

    if matches!(action, Action::Navigate(_)) {
        dom::scroll_to_top();
    }
}

/// popstate: re-resolver la URL sin agregar entradas al historial
fn on_location_change() {
    let path = history::current_path().unwrap_or_else(|| "/".to_string());
    let route = match app::sync_location(&path) {
        Ok(route) => route,
        Err(e) => {
            log::error!("❌ [ROUTER] Error corrigiendo la URL: {:?}", e);
            router::resolve(&path).route()
        }
    };

    let update = APP.with(|app_cell| {
        app_cell.borrow().as_ref().and_then(|app| {
            // Cambios solo de hash (#services, href="#") no re-renderizan
            (app.state().current_route() != route)
                .then(|| SiteViewModel::new().navigate(app.state(), route))
        })
    });

    if let Some(update) = update {
        rerender_app_with_type(update);
    }
}

/// Aplicar una actualización (incremental con fallback a re-render completo)
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let needs_full_render = match update_type {
            UpdateType::Incremental(inc_type) => match app_cell.borrow().as_ref() {
                Some(app) => match app.update_incremental(inc_type) {
                    Ok(IncrementalOutcome::Applied) => false,
                    Ok(IncrementalOutcome::NeedsFullRender) => {
                        log::info!("🔄 [UPDATE] Cambiando a re-render completo");
                        true
                    }
                    Err(e) => {
                        log::error!("❌ [UPDATE] Error en actualización incremental {:?}: {:?}", inc_type, e);
                        true
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App no está inicializada");
                    false
                }
            },
            UpdateType::FullRender => true,
        };

        if needs_full_render {
            match app_cell.borrow_mut().as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            }
        }
    });
}

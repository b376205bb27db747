// ============================================================================
// SITE VIEWMODEL - Aplica acciones del usuario sobre el estado
// ============================================================================
// Sin DOM: devuelve qué tipo de actualización necesita la vista.
// ============================================================================

use crate::models::Route;
use crate::state::{Action, AppState, IncrementalUpdate, UpdateType};

/// ViewModel del sitio - SOLO lógica de estado
#[derive(Debug, Default, Clone, Copy)]
pub struct SiteViewModel;

impl SiteViewModel {
    pub fn new() -> Self {
        Self
    }

    /// Aplicar una acción y devolver el tipo de actualización requerida
    pub fn handle(&self, state: &AppState, action: Action) -> UpdateType {
        match action {
            Action::Navigate(route) => self.navigate(state, route),
            Action::ToggleMenu => {
                let open = state.menu.toggle();
                log::debug!("☰ [MENU] {}", if open { "abierto" } else { "cerrado" });
                UpdateType::Incremental(IncrementalUpdate::MobileMenu)
            }
        }
    }

    /// Navegar: toda navegación deja el menú cerrado
    pub fn navigate(&self, state: &AppState, route: Route) -> UpdateType {
        let previous = state.current_route();
        state.menu.close();
        state.set_route(route);
        log::info!("🧭 [NAV] {} -> {}", previous.path(), route.path());
        UpdateType::FullRender
    }
}

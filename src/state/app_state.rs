// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Route;
use crate::state::MenuState;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de página)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Re-montar solo el menú móvil
    MobileMenu,
}

/// Intención del usuario, disparada desde un evento del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    ToggleMenu,
}

impl Action {
    /// Valor del atributo data-on-* en el DOM montado
    pub fn encode(self) -> String {
        match self {
            Action::Navigate(route) => format!("navigate:{}", route.path()),
            Action::ToggleMenu => "toggle-menu".to_string(),
        }
    }

    /// Inverso de `encode`; None si el valor no corresponde a una acción
    pub fn decode(value: &str) -> Option<Action> {
        match value {
            "toggle-menu" => Some(Action::ToggleMenu),
            _ => value
                .strip_prefix("navigate:")
                .and_then(Route::from_path)
                .map(Action::Navigate),
        }
    }
}

/// Estado global de la aplicación
#[derive(Clone, Debug)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,
    pub menu: MenuState,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            route: Rc::new(RefCell::new(route)),
            menu: MenuState::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_attribute_values() {
        assert_eq!(Action::ToggleMenu.encode(), "toggle-menu");
        assert_eq!(Action::Navigate(Route::Reports).encode(), "navigate:/reports");
        assert_eq!(Action::decode("navigate:/help"), Some(Action::Navigate(Route::Help)));
        assert_eq!(Action::decode("toggle-menu"), Some(Action::ToggleMenu));
    }

    #[test]
    fn test_decode_rejects_unknown_values() {
        assert_eq!(Action::decode(""), None);
        assert_eq!(Action::decode("navigate:/nope"), None);
        assert_eq!(Action::decode("navigate:/about/"), None);
        assert_eq!(Action::decode("/about"), None);
    }

    #[test]
    fn test_navigate_keeps_route_between_renders() {
        let state = AppState::new(Route::Services);
        assert_eq!(state.current_route(), Route::Services);
        state.set_route(Route::Help);
        assert_eq!(state.clone().current_route(), Route::Help);
    }
}

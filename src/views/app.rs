// ============================================================================
// APP VIEW - Shell (header + página + footer + chat flotante)
// ============================================================================

use crate::dom::{ElementBuilder, Node};
use crate::models::{LoginKind, Route};
use crate::state::AppState;
use crate::views::shared::{render_floating_chat, render_footer, render_header};
use crate::views::{render_about, render_help, render_home, render_login, render_register, render_reports, render_services};

/// Vista de una ruta (exactamente una por path)
pub fn render_page(route: Route) -> Node {
    match route {
        Route::Home => render_home(),
        Route::About => render_about(),
        Route::Services => render_services(),
        Route::StudentLogin => render_login(LoginKind::Student),
        Route::FacultyLogin => render_login(LoginKind::Faculty),
        Route::Reports => render_reports(),
        Route::Help => render_help(),
        Route::Register => render_register(),
    }
}

/// Árbol completo de la aplicación para el estado actual
pub fn render_app(state: &AppState) -> Node {
    let route = state.current_route();

    ElementBuilder::new("div")
        .id("app-shell")
        .class("app-shell")
        .child(render_header(state))
        .child(
            ElementBuilder::new("div")
                .class("page")
                .child(render_page(route))
                .build(),
        )
        .child(render_footer(route))
        .child(render_floating_chat())
        .build()
}

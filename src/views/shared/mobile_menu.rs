// ============================================================================
// MOBILE MENU - Botón ☰ + panel con los enlaces (solo cuando está abierto)
// ============================================================================

use crate::dom::{ElementBuilder, Node};
use crate::models::{Route, PRIMARY_NAV};
use crate::state::{Action, AppState};
use crate::views::shared::nav_link::render_nav_link;

/// ID del contenedor (objetivo de la actualización incremental)
pub const MOBILE_MENU_ID: &str = "mobile-menu";
const PANEL_ID: &str = "mobile-menu-panel";

pub fn render_mobile_menu(state: &AppState) -> Node {
    let open = state.menu.is_open();
    let current = state.current_route();

    let toggle = ElementBuilder::new("button")
        .attr("type", "button")
        .class("menu-toggle")
        .attr("aria-label", "menu")
        .attr("aria-expanded", if open { "true" } else { "false" })
        .attr("aria-controls", PANEL_ID)
        .on_click(Action::ToggleMenu)
        .text("☰")
        .build();

    let mut container = ElementBuilder::new("div")
        .id(MOBILE_MENU_ID)
        .class("mobile-menu")
        .child(toggle);

    if open {
        container = container.add_class("open").child(render_panel(current));
    }

    container.build()
}

fn render_panel(current: Route) -> Node {
    let links = PRIMARY_NAV.iter().map(|entry| {
        let class = if entry.route == Route::Register {
            "mobile-link nav-cta"
        } else {
            "mobile-link"
        };
        render_nav_link(entry, current, class)
    });

    ElementBuilder::new("nav")
        .id(PANEL_ID)
        .class("mobile-menu-panel")
        .attr("aria-label", "Mobile")
        .children(links)
        .build()
}

// ============================================================================
// HOME VIEW - Hero + servicios principales
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{ElementBuilder, Node};
use crate::models::content::{HOME_DESCRIPTION, HOME_HEADLINE};
use crate::models::Route;
use crate::state::Action;
use crate::views::services::{render_service_grid, CardStyle};

/// Degradado sobre la imagen del hero
const HERO_OVERLAY: &str = "linear-gradient(rgba(11,116,222,0.08), rgba(255,255,255,0.02))";

pub fn render_home() -> Node {
    let actions = ElementBuilder::new("div")
        .class("hero-actions")
        .child(
            ElementBuilder::new("button")
                .attr("type", "button")
                .class("btn btn-primary")
                .on_click(Action::Navigate(Route::Register))
                .text("Register")
                .build(),
        )
        .child(
            ElementBuilder::new("a")
                .class("btn btn-outline")
                .attr("href", "#services")
                .text("Know More")
                .build(),
        )
        .build();

    let hero = ElementBuilder::new("section")
        .class("hero")
        .attr(
            "style",
            format!(
                "background-image: {}, url('{}');",
                HERO_OVERLAY, CONFIG.images.home_background_url
            ),
        )
        .child(
            ElementBuilder::new("div")
                .class("container")
                .child(
                    ElementBuilder::new("div")
                        .class("hero-card")
                        .child(ElementBuilder::new("h1").text(HOME_HEADLINE).build())
                        .child(ElementBuilder::new("p").text(HOME_DESCRIPTION).build())
                        .child(actions)
                        .build(),
                )
                .build(),
        )
        .build();

    let services = ElementBuilder::new("section")
        .id("services")
        .class("container section")
        .child(ElementBuilder::new("h2").text("Core Services").build())
        .child(render_service_grid(CardStyle::Compact))
        .build();

    ElementBuilder::new("main")
        .class("view view-home")
        .attr("data-view", "home")
        .child(hero)
        .child(services)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_button_navigates() {
        let node = render_home();
        let view = node.as_element().expect("main");
        let buttons = view.find_all_by_tag("button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].action_for("click"), Some(Action::Navigate(Route::Register)));
    }

    #[test]
    fn test_know_more_targets_services_section() {
        let node = render_home();
        let view = node.as_element().expect("main");
        let anchors = view.find_all(&|el| el.attr("href") == Some("#services"));
        assert_eq!(anchors.len(), 1);
        assert!(view.find_by_id("services").is_some());
    }

    #[test]
    fn test_hero_uses_configured_background() {
        let node = render_home();
        let view = node.as_element().expect("main");
        let hero = view.find_all_by_class("hero");
        let style = hero[0].attr("style").unwrap_or_default();
        assert!(style.contains(&CONFIG.images.home_background_url));
        assert!(view.text_content().contains(HOME_HEADLINE));
    }
}

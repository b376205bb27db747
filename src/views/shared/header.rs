use crate::config::CONFIG;
use crate::dom::{ElementBuilder, Node};
use crate::models::{NavigationEntry, Route, PRIMARY_NAV};
use crate::state::{Action, AppState};
use crate::views::shared::mobile_menu::render_mobile_menu;
use crate::views::shared::nav_link::render_nav_link;

/// Header fijo: marca, navegación de escritorio y menú móvil
pub fn render_header(state: &AppState) -> Node {
    let current = state.current_route();

    let brand = ElementBuilder::new("div")
        .class("brand")
        .child(
            ElementBuilder::new("img")
                .class("brand-logo")
                .attr("src", CONFIG.images.logo_url.as_str())
                .attr("alt", "Logo")
                .build(),
        )
        .child(
            ElementBuilder::new("div")
                .child(
                    ElementBuilder::new("a")
                        .class("brand-title")
                        .attr("href", Route::Home.path())
                        .on_click(Action::Navigate(Route::Home))
                        .text(CONFIG.brand.as_str())
                        .build(),
                )
                .child(
                    ElementBuilder::new("div")
                        .class("brand-tagline")
                        .text(CONFIG.tagline.as_str())
                        .build(),
                )
                .build(),
        )
        .build();

    let nav = ElementBuilder::new("nav")
        .class("primary-nav")
        .attr("aria-label", "Primary")
        .children(PRIMARY_NAV.iter().map(|entry| render_desktop_link(entry, current)))
        .build();

    let mobile = ElementBuilder::new("div")
        .class("mobile-only")
        .child(render_mobile_menu(state))
        .build();

    ElementBuilder::new("header")
        .class("site-header")
        .child(
            ElementBuilder::new("div")
                .class("container header-bar")
                .child(brand)
                .child(nav)
                .child(mobile)
                .build(),
        )
        .build()
}

fn render_desktop_link(entry: &NavigationEntry, current: Route) -> Node {
    // Register se muestra como botón
    let class = if entry.route == Route::Register {
        "nav-link nav-cta"
    } else {
        "nav-link"
    };
    render_nav_link(entry, current, class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_nav_has_eight_links_with_register_cta() {
        let node = render_header(&AppState::default());
        let header = node.as_element().expect("header");
        let navs = header.find_all_by_class("primary-nav");
        let links = navs[0].find_all_by_tag("a");
        assert_eq!(links.len(), 8);
        assert!(links[7].has_class("nav-cta"));
        assert_eq!(links.iter().filter(|l| l.has_class("nav-cta")).count(), 1);
    }

    #[test]
    fn test_brand_links_home() {
        let node = render_header(&AppState::new(Route::Help));
        let header = node.as_element().expect("header");
        let brand = header.find_all_by_class("brand-title");
        assert_eq!(brand[0].action_for("click"), Some(Action::Navigate(Route::Home)));
        assert_eq!(brand[0].text_content(), CONFIG.brand);
    }

    #[test]
    fn test_header_marks_current_route() {
        let node = render_header(&AppState::new(Route::Reports));
        let header = node.as_element().expect("header");
        let current: Vec<_> = header
            .find_all(&|el| el.attr("aria-current") == Some("page"))
            .iter()
            .filter_map(|el| el.attr("href"))
            .collect();
        assert_eq!(current, vec!["/reports"]);
    }
}

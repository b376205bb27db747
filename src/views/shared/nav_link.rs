use crate::dom::{ElementBuilder, Node};
use crate::models::{NavigationEntry, Route};
use crate::state::Action;

/// Enlace interno: href real + click que navega sin recargar.
/// El enlace de la ruta actual lleva `active` y aria-current.
pub fn render_nav_link(entry: &NavigationEntry, current: Route, class: &str) -> Node {
    let mut link = ElementBuilder::new("a")
        .class(class)
        .attr("href", entry.path())
        .on_click(Action::Navigate(entry.route));

    if entry.route == current {
        link = link.add_class("active").attr("aria-current", "page");
    }

    link.text(entry.label).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PRIMARY_NAV;

    #[test]
    fn test_link_points_to_route() {
        let node = render_nav_link(&PRIMARY_NAV[1], Route::Home, "nav-link");
        let link = node.as_element().expect("a");
        assert_eq!(link.attr("href"), Some("/about"));
        assert_eq!(link.action_for("click"), Some(Action::Navigate(Route::About)));
        assert_eq!(link.text_content(), "About");
        assert!(link.attr("aria-current").is_none());
    }

    #[test]
    fn test_current_route_is_marked() {
        let node = render_nav_link(&PRIMARY_NAV[1], Route::About, "nav-link");
        let link = node.as_element().expect("a");
        assert!(link.has_class("nav-link") && link.has_class("active"));
        assert_eq!(link.attr("aria-current"), Some("page"));
    }
}

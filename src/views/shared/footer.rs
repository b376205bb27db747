use crate::config::CONFIG;
use crate::dom::{ElementBuilder, Node};
use crate::models::content::FOOTER_CREDIT;
use crate::models::{NavigationEntry, Route, FOOTER_LINKS, FOOTER_SUPPORT};
use crate::views::shared::nav_link::render_nav_link;

pub fn render_footer(current: Route) -> Node {
    let brand = ElementBuilder::new("div")
        .class("footer-brand")
        .child(
            ElementBuilder::new("img")
                .class("footer-logo")
                .attr("src", CONFIG.images.logo_url.as_str())
                .attr("alt", "logo")
                .build(),
        )
        .child(
            ElementBuilder::new("p")
                .class("footer-contact")
                .text(CONFIG.contact_line.as_str())
                .build(),
        )
        .build();

    let groups = ElementBuilder::new("div")
        .class("footer-groups")
        .child(render_link_group("Links", &FOOTER_LINKS, current))
        .child(render_link_group("Support", &FOOTER_SUPPORT, current))
        .build();

    ElementBuilder::new("footer")
        .class("site-footer")
        .child(
            ElementBuilder::new("div")
                .class("container footer-main")
                .child(brand)
                .child(groups)
                .build(),
        )
        .child(
            ElementBuilder::new("div")
                .class("footer-credit")
                .text(FOOTER_CREDIT)
                .build(),
        )
        .build()
}

fn render_link_group(title: &str, entries: &[NavigationEntry], current: Route) -> Node {
    let items = entries.iter().map(|entry| {
        ElementBuilder::new("li")
            .child(render_nav_link(entry, current, "footer-link"))
            .build()
    });

    ElementBuilder::new("div")
        .class("footer-group")
        .child(ElementBuilder::new("h4").text(title).build())
        .child(ElementBuilder::new("ul").children(items).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_groups() {
        let node = render_footer(Route::Home);
        let footer = node.as_element().expect("footer");
        let groups = footer.find_all_by_class("footer-group");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].find_all_by_tag("h4")[0].text_content(), "Links");
        assert_eq!(groups[0].find_all_by_tag("a").len(), 4);
        assert_eq!(groups[1].find_all_by_tag("h4")[0].text_content(), "Support");
        assert_eq!(groups[1].find_all_by_tag("a").len(), 2);
        assert!(footer.text_content().contains("SIH25093"));
    }
}

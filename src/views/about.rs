use crate::dom::{ElementBuilder, Node};
use crate::models::content::ABOUT_DESCRIPTION;
use crate::models::ABOUT_BENEFITS;

pub fn render_about() -> Node {
    let benefits = ABOUT_BENEFITS
        .iter()
        .map(|benefit| ElementBuilder::new("li").text(*benefit).build());

    ElementBuilder::new("main")
        .class("view view-about container container--narrow section")
        .attr("data-view", "about")
        .child(ElementBuilder::new("h2").text("About the Platform").build())
        .child(ElementBuilder::new("p").class("lead").text(ABOUT_DESCRIPTION).build())
        .child(ElementBuilder::new("h3").text("Benefits").build())
        .child(ElementBuilder::new("ul").class("benefit-list").children(benefits).build())
        .build()
}

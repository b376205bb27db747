use crate::config::CONFIG;
use crate::dom::{ElementBuilder, Node};
use crate::models::content::ACCESSIBILITY_NOTE;
use crate::models::{HelpContent, HelpTopic, HELP_TOPICS};

pub fn render_help() -> Node {
    ElementBuilder::new("main")
        .class("view view-help container section")
        .attr("data-view", "help")
        .child(ElementBuilder::new("h2").text("Help & Support").build())
        .child(
            ElementBuilder::new("div")
                .class("help-grid")
                .children(HELP_TOPICS.iter().map(render_topic))
                .build(),
        )
        .child(
            ElementBuilder::new("section")
                .class("panel accessibility-note")
                .child(ElementBuilder::new("h3").text("Accessibility").build())
                .child(ElementBuilder::new("p").text(ACCESSIBILITY_NOTE).build())
                .build(),
        )
        .build()
}

fn render_topic(topic: &HelpTopic) -> Node {
    let card = ElementBuilder::new("div")
        .class("panel help-topic")
        .child(ElementBuilder::new("h3").text(topic.title).build());

    let body = match topic.content {
        HelpContent::Text(text) => ElementBuilder::new("p").text(text),
        HelpContent::SupportContact => ElementBuilder::new("p")
            .text(format!("Contact our technical team via {}.", CONFIG.support_contact)),
        HelpContent::ChatButton(label) => ElementBuilder::new("button")
            .attr("type", "button")
            .class("btn btn-primary")
            .text(label),
    };

    card.child(body.build()).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_and_accessibility() {
        let node = render_help();
        let view = node.as_element().expect("main");
        let titles: Vec<String> = view
            .find_all_by_class("help-topic")
            .iter()
            .map(|t| t.find_all_by_tag("h3")[0].text_content())
            .collect();
        assert_eq!(titles, vec!["Getting Started", "FAQs", "Technical Support", "Live Chat"]);
        let with_contact: Vec<String> = view
            .find_all_by_class("help-topic")
            .iter()
            .filter(|t| t.text_content().contains(&CONFIG.support_contact))
            .map(|t| t.find_all_by_tag("h3")[0].text_content())
            .collect();
        assert_eq!(with_contact, vec!["Technical Support"]);
        assert_eq!(view.find_all_by_class("accessibility-note").len(), 1);
    }

    #[test]
    fn test_topic_without_text_does_not_borrow_support_contact() {
        let node = render_topic(&HelpTopic {
            title: "Live Chat",
            content: HelpContent::ChatButton("Open"),
        });
        let card = node.as_element().expect("card");
        assert!(!card.text_content().contains(&CONFIG.support_contact));
        assert!(card.find_all_by_tag("p").is_empty());
        assert_eq!(card.find_all_by_tag("button").len(), 1);
    }

    #[test]
    fn test_live_chat_button_is_inert() {
        let node = render_help();
        let view = node.as_element().expect("main");
        let buttons = view.find_all_by_tag("button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].text_content(), "Start Chat (dummy)");
        assert!(buttons[0].listeners.is_empty());
    }
}

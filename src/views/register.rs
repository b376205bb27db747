use crate::dom::{ElementBuilder, Node};

const REGISTER_FIELDS: [(&str, &str); 3] = [
    ("text", "Full name / Institution name"),
    ("email", "Email"),
    ("tel", "Phone"),
];

/// Registro sin envío: el botón no hace nada
pub fn render_register() -> Node {
    let inputs = REGISTER_FIELDS.iter().map(|(input_type, placeholder)| {
        ElementBuilder::new("input")
            .attr("type", *input_type)
            .attr("placeholder", *placeholder)
            .attr("aria-label", *placeholder)
            .build()
    });

    let form = ElementBuilder::new("form")
        .class("register-form")
        .children(inputs)
        .child(
            ElementBuilder::new("button")
                .attr("type", "button")
                .class("btn btn-primary")
                .text("Create Account")
                .build(),
        )
        .build();

    ElementBuilder::new("main")
        .class("view view-register container container--narrow section")
        .attr("data-view", "register")
        .child(
            ElementBuilder::new("div")
                .class("panel")
                .child(ElementBuilder::new("h2").text("Register").build())
                .child(
                    ElementBuilder::new("p")
                        .text("Register your institution or create a student account.")
                        .build(),
                )
                .child(form)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_inert_fields() {
        let node = render_register();
        let view = node.as_element().expect("main");
        let placeholders: Vec<_> = view
            .find_all_by_tag("input")
            .iter()
            .filter_map(|i| i.attr("placeholder"))
            .collect();
        assert_eq!(placeholders, vec!["Full name / Institution name", "Email", "Phone"]);
        assert!(view.find_all(&|el| !el.listeners.is_empty()).is_empty());
        assert_eq!(view.find_all_by_tag("button")[0].attr("type"), Some("button"));
    }
}

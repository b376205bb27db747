// ============================================================================
// LOGIN VIEW - Formulario cosmético (sin autenticación)
// ============================================================================
// Solo cambian título, etiqueta/placeholder del ID y la imagen de fondo.
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{ElementBuilder, Node};
use crate::models::LoginKind;

/// Oscurece la imagen de fondo para que la tarjeta se lea
const LOGIN_OVERLAY: &str = "linear-gradient(rgba(3,7,18,0.55), rgba(3,7,18,0.4))";

pub fn render_login(kind: LoginKind) -> Node {
    let form = ElementBuilder::new("form")
        .class("login-form")
        .attr("autocomplete", "off")
        .child(create_form_group("login-id", kind.id_label(), "text", kind.id_placeholder()))
        .child(create_form_group("login-password", "Password", "password", "••••••"))
        .child(create_form_group("login-captcha", "Captcha (type 1234)", "text", "1234"))
        .child(
            ElementBuilder::new("div")
                .class("form-actions")
                .child(
                    ElementBuilder::new("button")
                        .attr("type", "button")
                        .class("btn btn-primary")
                        .text("Submit")
                        .build(),
                )
                .child(
                    ElementBuilder::new("a")
                        .class("muted-link")
                        .attr("href", "#")
                        .text("Forgot?")
                        .build(),
                )
                .build(),
        )
        .build();

    ElementBuilder::new("main")
        .class("view view-login")
        .attr("data-view", kind.route().view_key())
        .attr(
            "style",
            format!(
                "background-image: {}, url('{}'); background-size: cover;",
                LOGIN_OVERLAY,
                kind.background_url(&CONFIG)
            ),
        )
        .child(
            ElementBuilder::new("div")
                .class("login-card")
                .child(ElementBuilder::new("h2").text(kind.heading()).build())
                .child(form)
                .build(),
        )
        .build()
}

/// Label + input inerte
fn create_form_group(id: &str, label: &str, input_type: &str, placeholder: &str) -> Node {
    ElementBuilder::new("div")
        .class("form-group")
        .child(
            ElementBuilder::new("label")
                .attr("for", id)
                .text(label)
                .build(),
        )
        .child(
            ElementBuilder::new("input")
                .id(id)
                .attr("type", input_type)
                .attr("placeholder", placeholder)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::VElement;

    fn view(kind: LoginKind) -> VElement {
        render_login(kind).as_element().cloned().expect("main")
    }

    #[test]
    fn test_student_variant() {
        let main = view(LoginKind::Student);
        assert_eq!(main.find_all_by_tag("h2")[0].text_content(), "Student Login");
        assert_eq!(main.find_all_by_tag("label")[0].text_content(), "Student ID");
        assert_eq!(main.find_by_id("login-id").and_then(|i| i.attr("placeholder")), Some("S123456"));
    }

    #[test]
    fn test_faculty_variant() {
        let main = view(LoginKind::Faculty);
        assert_eq!(main.find_all_by_tag("h2")[0].text_content(), "Faculty Login");
        assert_eq!(main.find_all_by_tag("label")[0].text_content(), "Faculty ID");
        assert_eq!(main.find_by_id("login-id").and_then(|i| i.attr("placeholder")), Some("F12345"));
    }

    #[test]
    fn test_shared_fields_are_identical() {
        let student = view(LoginKind::Student);
        let faculty = view(LoginKind::Faculty);
        for id in ["login-password", "login-captcha"] {
            assert_eq!(student.find_by_id(id), faculty.find_by_id(id));
        }
        assert_eq!(student.find_all_by_class("form-actions"), faculty.find_all_by_class("form-actions"));
        assert_eq!(student.find_all_by_tag("input").len(), 3);
    }

    #[test]
    fn test_form_is_inert() {
        let main = view(LoginKind::Student);
        assert!(main.find_all(&|el| !el.listeners.is_empty()).is_empty());
        let buttons = main.find_all_by_tag("button");
        assert_eq!(buttons[0].attr("type"), Some("button"));
        assert!(main.find_all_by_tag("form")[0].attr("action").is_none());
    }
}

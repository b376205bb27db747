// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use crate::dom::node::{Listener, Node, VElement, SVG_NS};
use crate::state::Action;

pub struct ElementBuilder {
    element: VElement,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento HTML
    pub fn new(tag: &str) -> Self {
        Self {
            element: VElement::new(tag, None),
        }
    }

    /// Crear builder para un elemento SVG
    pub fn svg(tag: &str) -> Self {
        Self {
            element: VElement::new(tag, Some(SVG_NS)),
        }
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(mut self, class: &str) -> Self {
        self.element.set_attr("class", class.to_string());
        self
    }

    /// Agregar clases adicionales (sin reemplazar)
    pub fn add_class(mut self, class: &str) -> Self {
        let classes = match self.element.attr("class") {
            Some(current) if !current.is_empty() => format!("{} {}", current, class),
            _ => class.to_string(),
        };
        self.element.set_attr("class", classes);
        self
    }

    /// Establecer ID
    pub fn id(mut self, id: &str) -> Self {
        self.element.set_attr("id", id.to_string());
        self
    }

    /// Establecer text content (reemplaza los hijos)
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.children = vec![Node::Text(text.into())];
        self
    }

    /// Establecer atributo
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.element.set_attr(name, value.into());
        self
    }

    /// Agregar hijo
    pub fn child(mut self, child: Node) -> Self {
        self.element.children.push(child);
        self
    }

    /// Agregar varios hijos
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.element.children.extend(children);
        self
    }

    /// Asociar una acción a un evento
    pub fn on(mut self, event: &'static str, action: Action) -> Self {
        self.element.listeners.push(Listener { event, action });
        self
    }

    pub fn on_click(self, action: Action) -> Self {
        self.on("click", action)
    }

    /// Construir y retornar nodo
    pub fn build(self) -> Node {
        Node::Element(self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_appends() {
        let node = ElementBuilder::new("a").class("nav-link").add_class("active").build();
        assert_eq!(node.as_element().and_then(|el| el.attr("class")), Some("nav-link active"));

        let bare = ElementBuilder::new("a").add_class("active").build();
        assert_eq!(bare.as_element().and_then(|el| el.attr("class")), Some("active"));
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let node = ElementBuilder::new("input").attr("type", "text").attr("type", "password").build();
        let element = node.as_element().expect("element");
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.attr("type"), Some("password"));
    }

    #[test]
    fn test_text_replaces_children() {
        let node = ElementBuilder::new("p")
            .child(ElementBuilder::new("span").build())
            .text("only text")
            .build();
        assert_eq!(node.as_element().map(|el| el.children.len()), Some(1));
        assert_eq!(node.text_content(), "only text");
    }

    #[test]
    fn test_svg_namespace() {
        let node = ElementBuilder::svg("rect").build();
        assert_eq!(node.as_element().and_then(|el| el.namespace), Some(SVG_NS));
        assert_eq!(ElementBuilder::new("div").build().as_element().and_then(|el| el.namespace), None);
    }
}

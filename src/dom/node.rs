// ============================================================================
// NODE - Árbol de marcado en memoria
// ============================================================================
// Las vistas construyen este árbol; dom::mount lo convierte en elementos
// web_sys. Se puede inspeccionar sin navegador (tests).
// ============================================================================

use crate::state::Action;

/// Namespace de elementos SVG
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(VElement),
    Text(String),
}

/// Binding declarativo evento -> acción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub event: &'static str,
    pub action: Action,
}

/// Atributo que lleva la acción en el DOM montado (data-on-click, ...)
pub fn listener_attribute(event: &str) -> String {
    format!("data-on-{}", event)
}

impl Listener {
    /// Par (atributo, valor) que dom::mount escribe en el elemento
    pub fn as_attribute(&self) -> (String, String) {
        (listener_attribute(self.event), self.action.encode())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VElement {
    pub tag: String,
    pub namespace: Option<&'static str>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub listeners: Vec<Listener>,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Texto concatenado (como Node.textContent)
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl VElement {
    pub fn new(tag: &str, namespace: Option<&'static str>) -> Self {
        Self {
            tag: tag.to_string(),
            namespace,
            attributes: Vec::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn set_attr(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Elementos hijos directos (sin nodos de texto)
    pub fn child_elements(&self) -> impl Iterator<Item = &VElement> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Este elemento y todos sus descendientes que cumplen el predicado (preorden)
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&VElement) -> bool) -> Vec<&'a VElement> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&VElement) -> bool, found: &mut Vec<&'a VElement>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(predicate, found);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&VElement> {
        self.find_all(&|el| el.id() == Some(id)).into_iter().next()
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&VElement> {
        self.find_all(&|el| el.tag == tag)
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&VElement> {
        self.find_all(&|el| el.has_class(class))
    }

    /// Acción asociada a un evento, si existe
    pub fn action_for(&self, event: &str) -> Option<Action> {
        self.listeners
            .iter()
            .find(|listener| listener.event == event)
            .map(|listener| listener.action)
    }
}

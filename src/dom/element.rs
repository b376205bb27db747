// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular el DOM real
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

fn require_document() -> Result<Document, JsValue> {
    document().ok_or_else(|| JsValue::from_str("No document"))
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento (con namespace opcional, p.ej. SVG)
pub fn create_element(tag: &str, namespace: Option<&str>) -> Result<Element, JsValue> {
    let doc = require_document()?;
    match namespace {
        Some(ns) => doc.create_element_ns(Some(ns), tag),
        None => doc.create_element(tag),
    }
}

/// Crear nodo de texto
pub fn create_text_node(text: &str) -> Result<web_sys::Text, JsValue> {
    Ok(require_document()?.create_text_node(text))
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &web_sys::Node) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Reemplazar un elemento por otro nodo en el mismo lugar
pub fn replace_element(old: &Element, new: &web_sys::Node) -> Result<(), JsValue> {
    old.replace_with_with_node_1(new)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Título del documento
pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

/// Volver arriba después de cambiar de página
pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

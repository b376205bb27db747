// ============================================================================
// MOUNT - Convierte el árbol de marcado en nodos web_sys
// ============================================================================
// Los listeners del árbol se montan como atributos data-on-<evento>; un único
// listener delegado en la raíz (#app) los lee y despacha la acción.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use crate::dom::node::{listener_attribute, Node, VElement};
use crate::dom::{append_child, create_element, create_text_node, on_event, set_attribute};
use crate::state::Action;

/// Montar un nodo (y su subárbol) como nodo del DOM
pub fn mount(node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(create_text_node(text)?.unchecked_into()),
        Node::Element(element) => Ok(mount_element(element)?.unchecked_into()),
    }
}

/// Montar un elemento
pub fn mount_element(element: &VElement) -> Result<Element, JsValue> {
    let el = create_element(&element.tag, element.namespace)?;

    for (name, value) in &element.attributes {
        set_attribute(&el, name, value)?;
    }

    for listener in &element.listeners {
        let (name, value) = listener.as_attribute();
        set_attribute(&el, &name, &value)?;
    }

    for child in &element.children {
        let mounted = mount(child)?;
        append_child(&el, &mounted)?;
    }

    Ok(el)
}

/// Listener de click delegado en la raíz. Se instala una vez: la raíz
/// sobrevive a los re-renders, sus hijos no.
pub fn install_click_delegation(root: &Element) -> Result<(), JsValue> {
    let attribute = listener_attribute("click");
    let selector = format!("[{}]", attribute);

    on_event(root, "click", move |event| {
        let Some(bound) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(&selector).ok().flatten())
        else {
            return;
        };

        // Ctrl/Cmd/Shift/Alt o botón medio: nueva pestaña, lo maneja el navegador
        if !is_plain_activation(&event) {
            return;
        }

        let Some(value) = bound.get_attribute(&attribute) else {
            return;
        };
        match Action::decode(&value) {
            Some(action) => {
                // Los enlaces internos no recargan la página
                event.prevent_default();
                crate::dispatch(action);
            }
            None => log::warn!("⚠️ [EVENTS] Acción desconocida en {}: '{}'", attribute, value),
        }
    })
}

fn is_plain_activation(event: &Event) -> bool {
    match event.dyn_ref::<MouseEvent>() {
        Some(mouse) => is_plain_click(
            mouse.button(),
            mouse.ctrl_key() || mouse.meta_key() || mouse.shift_key() || mouse.alt_key(),
        ),
        // Activación por teclado u otro origen sintético
        None => true,
    }
}

/// Botón primario sin modificadores
pub(crate) fn is_plain_click(button: i16, modified: bool) -> bool {
    button == 0 && !modified
}

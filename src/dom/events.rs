// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// - closure.forget() deja el closure Rust vivo para siempre: solo se usa en
//   listeners que se registran UNA SOLA VEZ al iniciar la app.
// - Clicks: un único listener delegado en #app (dom::mount); los elementos
//   montados solo llevan atributos data-on-click, sin closures propios.
// - popstate (window): protegido contra doble registro.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use std::cell::Cell;

thread_local! {
    static WINDOW_LISTENERS_INSTALLED: Cell<bool> = Cell::new(false);
}

/// Listener sobre un elemento (el closure no se libera nunca)
pub fn on_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener de popstate (back/forward). Protegido contra doble registro.
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    if WINDOW_LISTENERS_INSTALLED.with(|installed| installed.replace(true)) {
        log::warn!("⚠️ [EVENTS] popstate ya registrado, se ignora");
        return Ok(());
    }

    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

use crate::dom::{ElementBuilder, Node};
use crate::models::content::FLOATING_CHAT_TEXT;

/// Enlace flotante de chat (sin destino real)
pub fn render_floating_chat() -> Node {
    ElementBuilder::new("a")
        .class("floating-chat")
        .attr("href", "#")
        .text(FLOATING_CHAT_TEXT)
        .build()
}

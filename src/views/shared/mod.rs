pub mod nav_link;
pub mod header;
pub mod mobile_menu;
pub mod footer;
pub mod floating_chat;

pub use nav_link::render_nav_link;
pub use header::render_header;
pub use mobile_menu::{render_mobile_menu, MOBILE_MENU_ID};
pub use footer::render_footer;
pub use floating_chat::render_floating_chat;

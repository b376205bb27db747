// ============================================================================
// DOM MODULE - Árbol de marcado + puente hacia web_sys
// ============================================================================

pub mod node;
pub mod builder;
pub mod element;
pub mod events;
pub mod mount;
pub mod incremental;

pub use node::*;
pub use builder::*;
pub use element::*;
pub use events::*;
pub use mount::*;
pub use incremental::*;

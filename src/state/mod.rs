// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod menu_state;
pub mod app_state;

pub use menu_state::*;
pub use app_state::*;

// ============================================================================
// MENU STATE - Estado abierto/cerrado del menú móvil
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Único flag de UI mutable del shell. Inicial: cerrado.
#[derive(Clone, Debug)]
pub struct MenuState {
    pub open: Rc<RefCell<bool>>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            open: Rc::new(RefCell::new(false)),
        }
    }

    pub fn is_open(&self) -> bool {
        *self.open.borrow()
    }

    /// Alternar y devolver el nuevo estado
    pub fn toggle(&self) -> bool {
        let mut open = self.open.borrow_mut();
        *open = !*open;
        *open
    }

    pub fn close(&self) {
        *self.open.borrow_mut() = false;
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::new().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for presses in 0..7 {
            let menu = MenuState::new();
            for _ in 0..presses {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), presses % 2 == 1, "presses = {}", presses);
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let menu = MenuState::new();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let menu = MenuState::new();
        let handle = menu.clone();
        handle.toggle();
        assert!(menu.is_open());
    }
}

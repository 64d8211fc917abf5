// Modal overlays
//
// Self-contained dialogs that handle their own input and return actions.
// App holds Option<Modal>; input routing acts on the returned ModalAction.
// While a modal is open it absorbs all keyboard input, so the confirmation
// gate in front of clear-history cannot be bypassed.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal without acting
    Close,
    /// User confirmed the pending destructive action
    Confirm,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Confirmation gate before clearing all history
    ConfirmClear,
}

impl Modal {
    /// Handle keyboard input, return the action for the caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Enter => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::ConfirmClear => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ModalAction::Confirm,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_clear_requires_explicit_yes() {
        let mut modal = Modal::ConfirmClear;
        assert_eq!(modal.handle_input(KeyCode::Char('z')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::Confirm);
    }

    #[test]
    fn test_help_closes_on_escape() {
        let mut modal = Modal::Help;
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('z')), ModalAction::None);
    }
}

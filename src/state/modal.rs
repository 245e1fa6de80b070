//! Modal dialog state for the UI.

use crate::state::types::Character;

/// Active modal overlay, if any.
///
/// While a modal is open it consumes all key input; closing it returns the
/// previous focus untouched.
#[derive(Clone, Debug, Default)]
pub enum Modal {
    /// No modal visible.
    #[default]
    None,
    /// Full character card for the selected result.
    Details(Character),
    /// Keybinding reference overlay.
    Help,
}

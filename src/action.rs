use crate::keycode::{KeyCode, ModifierCombination};

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, for all keycodes defined in the `KeyCode` enum.
    Key(KeyCode),
    /// Modifier combination on its own.
    Modifier(ModifierCombination),
    /// Key stroke with a modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// Deactivate a layer
    LayerOff(u8),
    /// Toggle a layer
    LayerToggle(u8),
}

/// A KeyAction is the behavior bound at a keyboard position, stored in the keymap.
/// It is either a single action, or a reference to a behavior configured elsewhere.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, the next active layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// Don't wait for the release of the key, auto-release after a time threshold.
    Tap(Action),
    /// Layer-morph behavior, references a morph configuration by index.
    Morph(u8),
}

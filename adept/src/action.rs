use crate::keycode::{CustomKeycode, KeyCode};

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A host keycode, such as mouse buttons or the bootloader key
    Key(KeyCode),
    /// Activate a layer while held
    LayerOn(u8),
    /// A keycode processed by this keymap
    Custom(CustomKeycode),
}

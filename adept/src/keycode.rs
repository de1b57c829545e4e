use strum::FromRepr;

/// First keycode the host firmware leaves free for user keycodes.
pub const SAFE_RANGE: u16 = 0x7E40;

/// Host keycodes used by the default keymap.
///
/// These are handled entirely by the host firmware, the keymap only places them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Left button
    MouseBtn1,
    /// Right button
    MouseBtn2,
    /// Middle button
    MouseBtn3,
    /// Back
    MouseBtn4,
    /// Forward
    MouseBtn5,
    /// Reboot into the bootloader
    Bootloader,
}

/// Keycodes implemented by this keymap, allocated upward from [`SAFE_RANGE`].
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Type the flash command on the host
    Compile = SAFE_RANGE,
    DpiUp,
    DpiDown,
    /// Set CPI back to the default value
    DpiReset,
    /// Turn motion into scrolling while held
    DragScroll,
    /// Scroll faster
    ScrollUp,
    /// Scroll slower
    ScrollDown,
    /// Restore the default scroll speed
    ScrollDefault,
    /// Flip the vertical scroll direction
    ScrollInvertToggle,
}

impl CustomKeycode {
    /// Convert a raw keycode from the host, `None` if it's not one of ours.
    pub fn from_keycode(keycode: u16) -> Option<Self> {
        Self::from_repr(keycode)
    }

    pub fn keycode(self) -> u16 {
        self as u16
    }
}

use crate::action::KeyAction;
use crate::host::LayerState;
use crate::{a, c, k, layer, lt};

pub const ROW: usize = 1;
pub const COL: usize = 6;
pub const NUM_LAYER: usize = 4;

/// Buttons and drag scroll
pub const MAIN: u8 = 0;
/// Held from the main layer to change the sensor CPI
pub const DPI_SETTINGS: u8 = 1;
/// Held from the main layer to change scroll speed and direction
pub const SCROLL_SETTINGS: u8 = 2;
/// Active while drag scrolling
pub const SETTINGS: u8 = 3;

// Keys are in `LAYOUT` order: the four top buttons from left to right, then the two bottom buttons.
#[rustfmt::skip]
const DEFAULT_KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [lt!(SCROLL_SETTINGS, MouseBtn4), lt!(DPI_SETTINGS, MouseBtn5), c!(DragScroll), k!(MouseBtn2), k!(MouseBtn1), k!(MouseBtn3)]
    ]),
    layer!([
        [c!(DpiUp), a!(Transparent), a!(Transparent), c!(DpiReset), c!(DpiDown), a!(Transparent)]
    ]),
    layer!([
        [a!(Transparent), c!(ScrollUp), a!(Transparent), c!(ScrollDefault), c!(ScrollDown), c!(ScrollInvertToggle)]
    ]),
    layer!([
        [k!(Bootloader), c!(Compile), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
    ]),
];

/// The keymap shape of this board
pub type AdeptKeymap = Keymap<ROW, COL, NUM_LAYER>;

pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    DEFAULT_KEYMAP
}

/// Keymap represents the stack of layers.
///
/// Layer activation is up to the host, the keymap only answers which action sits at a position
/// for a given layer state.
pub struct Keymap<const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: [[[KeyAction; COL]; ROW]; NUM_LAYER],
}

impl Default for AdeptKeymap {
    fn default() -> Self {
        Self::new(get_default_keymap())
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keymap<ROW, COL, NUM_LAYER> {
    pub const fn new(layers: [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        Self { layers }
    }

    /// Action of a single layer, transparent entries included
    pub fn layer_action(&self, layer: u8, row: usize, col: usize) -> Option<KeyAction> {
        self.layers.get(layer as usize)?.get(row)?.get(col).copied()
    }

    /// Resolve the action at `(row, col)`, checking active layers from the highest one down.
    ///
    /// Returns `None` if the position is outside the matrix.
    pub fn action_at(&self, row: usize, col: usize, state: &LayerState<NUM_LAYER>) -> Option<KeyAction> {
        if row >= ROW || col >= COL {
            return None;
        }
        for layer in (0..NUM_LAYER).rev() {
            if !state.is_active(layer as u8) {
                continue;
            }
            match self.layers[layer][row][col] {
                KeyAction::Transparent => continue,
                action => return Some(action),
            }
        }
        Some(KeyAction::No)
    }
}

//! Interfaces to the host firmware
//!
//! The keymap never talks to hardware directly. Everything it needs from the firmware it runs on,
//! the pointing device driver, the layer stack and the macro typer, goes through these traits.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// Receives new sensor CPI values
pub trait CpiSink {
    fn set_cpi(&mut self, cpi: u16);
}

/// Activates and deactivates layers in the host layer stack
pub trait LayerControl {
    fn layer_on(&mut self, layer: u8);
    fn layer_off(&mut self, layer: u8);
}

/// Types text on the host computer
pub trait TextSender {
    fn send_string(&mut self, text: &str);
}

/// Everything the key handler may call on the host
pub trait Host: CpiSink + LayerControl + TextSender {}

impl<T: CpiSink + LayerControl + TextSender> Host for T {}

/// Hand CPI updates to a sensor task running elsewhere, which waits on the signal.
impl<M: RawMutex> CpiSink for &Signal<M, u16> {
    fn set_cpi(&mut self, cpi: u16) {
        self.signal(cpi);
    }
}

/// Plain layer state, one flag per layer.
///
/// Layer 0 is the default layer and is always considered active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState<const NUM_LAYER: usize> {
    layers: [bool; NUM_LAYER],
}

impl<const NUM_LAYER: usize> Default for LayerState<NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_LAYER: usize> LayerState<NUM_LAYER> {
    pub const fn new() -> Self {
        Self {
            layers: [false; NUM_LAYER],
        }
    }

    pub fn is_active(&self, layer: u8) -> bool {
        let layer = layer as usize;
        layer == 0 || self.layers.get(layer).copied().unwrap_or(false)
    }

    /// Highest active layer
    pub fn highest(&self) -> u8 {
        self.layers.iter().rposition(|&on| on).unwrap_or(0) as u8
    }

    fn set(&mut self, layer: u8, on: bool) {
        match self.layers.get_mut(layer as usize) {
            Some(state) => *state = on,
            None => warn!("Layer {} out of range, {} layers available", layer, NUM_LAYER),
        }
    }
}

impl<const NUM_LAYER: usize> LayerControl for LayerState<NUM_LAYER> {
    fn layer_on(&mut self, layer: u8) {
        self.set(layer, true);
    }

    fn layer_off(&mut self, layer: u8) {
        self.set(layer, false);
    }
}

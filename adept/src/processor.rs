//! Host callbacks of the keymap.
//!
//! The host firmware owns one [`Adept`] and calls into it from its main loop:
//!
//! - [`Adept::post_init`] once after boot
//! - [`Adept::process_record`] for every key event
//! - [`Adept::pointing_task`] for every mouse report, before it is sent
//!
//! All calls happen on the same thread, nothing here blocks or waits.

use usbd_hid::descriptor::MouseReport;

use crate::config::{AdeptConfig, MacroConfig};
use crate::dpi::DpiController;
use crate::host::{CpiSink, Host, LayerControl};
use crate::keycode::CustomKeycode;
use crate::keymap::SETTINGS;
use crate::scroll::ScrollEmulator;

/// State of the keymap: sensor CPI and drag scroll.
#[derive(Debug, Clone)]
pub struct Adept {
    dpi: DpiController,
    scroll: ScrollEmulator,
    macros: MacroConfig,
}

impl Default for Adept {
    fn default() -> Self {
        Self::new(AdeptConfig::default())
    }
}

impl Adept {
    pub fn new(config: AdeptConfig) -> Self {
        Self {
            dpi: DpiController::new(config.dpi),
            scroll: ScrollEmulator::new(config.scroll),
            macros: config.macros,
        }
    }

    pub fn dpi(&self) -> &DpiController {
        &self.dpi
    }

    pub fn scroll(&self) -> &ScrollEmulator {
        &self.scroll
    }

    /// Apply the default CPI to the sensor and restore the default scroll settings
    pub fn post_init(&mut self, host: &mut impl CpiSink) {
        self.dpi.reset_to_base(host);
        self.scroll.reset();
        info!(
            "Keymap ready, CPI {}, scroll divisor {}, invert {}",
            self.dpi.dpi(),
            self.scroll.divisor(),
            self.scroll.invert()
        );
    }

    /// Handle a key event from the host.
    ///
    /// Keycodes that aren't ours are left alone. Always returns `true` so the host continues
    /// with its own processing of the key.
    pub fn process_record(&mut self, keycode: u16, pressed: bool, host: &mut impl Host) -> bool {
        match CustomKeycode::from_keycode(keycode) {
            Some(key) => self.process_custom(key, pressed, host),
            None => trace!("Keycode {} is not a custom keycode, skipped", keycode),
        }
        true
    }

    /// Handle one of the keymap's own keycodes.
    ///
    /// Drag scroll follows the key state, all other keys act on press only.
    pub fn process_custom(&mut self, key: CustomKeycode, pressed: bool, host: &mut impl Host) {
        if key == CustomKeycode::DragScroll {
            self.set_scrolling(pressed, host);
            return;
        }
        if !pressed {
            return;
        }

        debug!("Processing {:?}", key);
        match key {
            CustomKeycode::Compile => host.send_string(self.macros.flash_command),
            CustomKeycode::DpiUp => {
                self.dpi.adjust(true, host);
            }
            CustomKeycode::DpiDown => {
                self.dpi.adjust(false, host);
            }
            CustomKeycode::DpiReset => {
                self.dpi.reset_to_base(host);
            }
            CustomKeycode::ScrollUp => {
                self.scroll.adjust_speed(true);
            }
            CustomKeycode::ScrollDown => {
                self.scroll.adjust_speed(false);
            }
            CustomKeycode::ScrollDefault => self.scroll.reset_speed(),
            CustomKeycode::ScrollInvertToggle => {
                self.scroll.toggle_invert();
            }
            CustomKeycode::DragScroll => (),
        }
    }

    /// Start or stop drag scrolling.
    ///
    /// The settings layer, with the bootloader and flash command keys, is on while scrolling.
    pub fn set_scrolling(&mut self, active: bool, layers: &mut impl LayerControl) {
        self.scroll.set_active(active);
        if active {
            layers.layer_on(SETTINGS);
        } else {
            layers.layer_off(SETTINGS);
        }
    }

    /// Rewrite the mouse report of this polling cycle
    pub fn pointing_task(&mut self, report: MouseReport) -> MouseReport {
        self.scroll.transform(report)
    }
}

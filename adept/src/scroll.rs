//! Drag scroll: turn trackball motion into scroll wheel ticks while a key is held
use usbd_hid::descriptor::MouseReport;

use crate::config::ScrollConfig;

/// Scroll emulator
///
/// Motion is divided by `divisor` and accumulated, only whole ticks are sent. The remainder is
/// carried into the next report, so slow motion still scrolls eventually.
#[derive(Debug, Clone)]
pub struct ScrollEmulator {
    config: ScrollConfig,
    divisor: f32,
    invert: bool,
    active: bool,
    accumulated_h: f32,
    accumulated_v: f32,
}

impl Default for ScrollEmulator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollEmulator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            divisor: config.default_divisor,
            invert: config.default_invert,
            active: false,
            accumulated_h: 0.0,
            accumulated_v: 0.0,
        }
    }

    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fractional scroll distance carried to the next report, `(horizontal, vertical)`
    pub fn remainder(&self) -> (f32, f32) {
        (self.accumulated_h, self.accumulated_v)
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            debug!("Drag scroll {}", if active { "on" } else { "off" });
        }
        self.active = active;
    }

    /// Restore speed and direction to their defaults
    pub fn reset(&mut self) {
        self.divisor = self.config.default_divisor;
        self.invert = self.config.default_invert;
    }

    /// Change scroll speed by one step.
    ///
    /// Faster scrolling means a smaller divisor, so `increase` lowers the divisor.
    pub fn adjust_speed(&mut self, increase: bool) -> f32 {
        let divisor = if increase {
            self.divisor - self.config.divisor_step
        } else {
            self.divisor + self.config.divisor_step
        };
        self.divisor = divisor.clamp(self.config.min_divisor, self.config.max_divisor);
        debug!("Scroll divisor: {}", self.divisor);
        self.divisor
    }

    pub fn reset_speed(&mut self) {
        self.divisor = self.config.default_divisor;
        debug!("Scroll divisor reset to {}", self.divisor);
    }

    pub fn toggle_invert(&mut self) -> bool {
        self.invert = !self.invert;
        debug!("Scroll invert: {}", self.invert);
        self.invert
    }

    /// Rewrite a mouse report while drag scroll is active.
    ///
    /// Cursor motion is replaced by scroll ticks, buttons are kept. Inactive scrolling returns the
    /// report untouched. Only the vertical direction is inverted.
    pub fn transform(&mut self, mut report: MouseReport) -> MouseReport {
        if !self.active {
            return report;
        }

        self.accumulated_h += report.x as f32 / self.divisor;
        self.accumulated_v += report.y as f32 / self.divisor;

        // Truncate toward zero, a partial tick is never rounded up
        let h = self.accumulated_h as i8;
        let v = self.accumulated_v as i8;
        self.accumulated_h -= h as f32;
        self.accumulated_v -= v as f32;

        report.pan = h;
        report.wheel = if self.invert { v.saturating_neg() } else { v };
        report.x = 0;
        report.y = 0;
        trace!("Drag scroll report: pan {}, wheel {}", report.pan, report.wheel);
        report
    }
}

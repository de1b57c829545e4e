//! Sensor CPI stepping

use crate::config::DpiConfig;
use crate::host::CpiSink;

/// Tracks the sensor CPI and pushes every change to the pointing device.
#[derive(Debug, Clone)]
pub struct DpiController {
    dpi: u16,
    config: DpiConfig,
}

impl Default for DpiController {
    fn default() -> Self {
        Self::new(DpiConfig::default())
    }
}

impl DpiController {
    pub fn new(config: DpiConfig) -> Self {
        Self {
            dpi: config.default_dpi,
            config,
        }
    }

    /// Current CPI
    pub fn dpi(&self) -> u16 {
        self.dpi
    }

    /// Step applied by the next adjustment
    pub fn step_size(&self) -> u16 {
        self.config.step_for(self.dpi)
    }

    /// Move one step up or down, clamped to the configured range, and push the result to the sensor.
    pub fn adjust(&mut self, increase: bool, sink: &mut impl CpiSink) -> u16 {
        let step = self.step_size();
        let dpi = if increase {
            self.dpi.saturating_add(step)
        } else {
            self.dpi.saturating_sub(step)
        };
        self.dpi = dpi.clamp(self.config.min_dpi, self.config.max_dpi);
        debug!("CPI {} by {}, now {}", if increase { "up" } else { "down" }, step, self.dpi);
        sink.set_cpi(self.dpi);
        self.dpi
    }

    /// Force the CPI back to the default value
    pub fn reset_to_base(&mut self, sink: &mut impl CpiSink) -> u16 {
        self.dpi = self.config.default_dpi;
        info!("CPI reset to {}", self.dpi);
        sink.set_cpi(self.dpi);
        self.dpi
    }
}

/// The config struct for the adept keymap.
///
/// There are 3 parts:
/// 1. `DpiConfig`: bounds and step sizes of the sensor CPI.
/// 2. `ScrollConfig`: drag-scroll speed and direction.
/// 3. `MacroConfig`: text typed by macro keys.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdeptConfig {
    pub dpi: DpiConfig,
    pub scroll: ScrollConfig,
    pub macros: MacroConfig,
}

/// Use `step` for every CPI value from `from_dpi` upward, until the next step takes over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DpiStep {
    pub from_dpi: u16,
    pub step: u16,
}

impl DpiStep {
    pub const fn new(from_dpi: u16, step: u16) -> Self {
        Self { from_dpi, step }
    }
}

/// Config for sensor CPI stepping.
///
/// `min_dpi` must not be greater than `max_dpi`, and `steps` must be sorted by `from_dpi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DpiConfig {
    /// CPI applied after boot and by the reset key
    pub default_dpi: u16,
    pub min_dpi: u16,
    pub max_dpi: u16,
    /// Step size by CPI range.
    ///
    /// With the defaults the whole 200..=12000 range takes 21 presses, a flat 200 step would take 59.
    pub steps: [DpiStep; 3],
}

impl Default for DpiConfig {
    fn default() -> Self {
        Self {
            default_dpi: 400,
            min_dpi: 200,
            max_dpi: 12000,
            steps: [DpiStep::new(0, 200), DpiStep::new(1500, 500), DpiStep::new(5000, 1000)],
        }
    }
}

impl DpiConfig {
    /// Step size used when the sensor is currently at `dpi`
    pub fn step_for(&self, dpi: u16) -> u16 {
        self.steps
            .iter()
            .rev()
            .find(|s| dpi >= s.from_dpi)
            .map(|s| s.step)
            .unwrap_or(self.steps[0].step)
    }
}

/// Config for drag scrolling.
///
/// The divisor scales motion down into scroll ticks, so a larger divisor means slower scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    pub default_divisor: f32,
    pub min_divisor: f32,
    pub max_divisor: f32,
    /// Divisor change of a single speed key press
    pub divisor_step: f32,
    /// Invert the vertical scroll direction by default
    pub default_invert: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            default_divisor: 5.0,
            min_divisor: 1.0,
            max_divisor: 20.0,
            divisor_step: 1.0,
            default_invert: true,
        }
    }
}

/// Config for keys that type text through the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroConfig {
    /// Typed by the `Compile` key
    pub flash_command: &'static str,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            flash_command: "make clean && qmk flash -kb ploopy_adept -km default",
        }
    }
}

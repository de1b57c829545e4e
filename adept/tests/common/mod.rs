#![allow(dead_code)]

use adept::host::{CpiSink, LayerControl, LayerState, TextSender};
use adept::keymap::NUM_LAYER;
use usbd_hid::descriptor::MouseReport;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Host firmware stand-in, records everything the keymap asks for
#[derive(Default)]
pub struct TestHost {
    pub cpi_history: Vec<u16>,
    pub layers: LayerState<NUM_LAYER>,
    pub typed: Vec<String>,
}

impl TestHost {
    pub fn last_cpi(&self) -> Option<u16> {
        self.cpi_history.last().copied()
    }
}

impl CpiSink for TestHost {
    fn set_cpi(&mut self, cpi: u16) {
        self.cpi_history.push(cpi);
    }
}

impl LayerControl for TestHost {
    fn layer_on(&mut self, layer: u8) {
        self.layers.layer_on(layer);
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers.layer_off(layer);
    }
}

impl TextSender for TestHost {
    fn send_string(&mut self, text: &str) {
        self.typed.push(text.to_string());
    }
}

pub fn motion(x: i8, y: i8) -> MouseReport {
    MouseReport {
        buttons: 0,
        x,
        y,
        wheel: 0,
        pan: 0,
    }
}

/// `(x, y, pan, wheel)` of a report
pub fn fields(report: &MouseReport) -> (i8, i8, i8, i8) {
    (report.x, report.y, report.pan, report.wheel)
}

pub mod common;

use adept::action::{Action, KeyAction};
use adept::keycode::{CustomKeycode, KeyCode};
use adept::host::LayerControl;
use adept::keymap::{AdeptKeymap, SCROLL_SETTINGS};
use adept::Adept;
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use usbd_hid::descriptor::MouseReport;

use crate::common::{fields, motion, TestHost};

/// Press the key at `(0, col)` the way the host would: resolve it against the current layers and
/// hand custom keycodes to the keymap.
fn press(adept: &mut Adept, keymap: &AdeptKeymap, host: &mut TestHost, col: usize, pressed: bool) -> KeyAction {
    let action = keymap.action_at(0, col, &host.layers).unwrap();
    if let KeyAction::Single(Action::Custom(key)) = action {
        adept.process_record(key.keycode(), pressed, host);
    }
    action
}

#[test]
fn test_scroll_example() {
    let mut adept = Adept::default();
    let mut host = TestHost::default();
    adept.post_init(&mut host);

    adept.process_record(CustomKeycode::DragScroll.keycode(), true, &mut host);
    let report = adept.pointing_task(motion(10, 0));
    assert_eq!(fields(&report), (0, 0, 2, 0));
    assert_eq!(adept.scroll().remainder(), (0.0, 0.0));
}

#[test]
fn test_slow_motion_is_not_lost() {
    let mut adept = Adept::default();
    let mut host = TestHost::default();
    adept.process_record(CustomKeycode::DragScroll.keycode(), true, &mut host);

    let pans: Vec<i8> = (0..5).map(|_| adept.pointing_task(motion(1, 0)).pan).collect();
    assert_eq!(pans, vec![0, 0, 0, 0, 1]);

    let wheels: Vec<i8> = (0..5).map(|_| adept.pointing_task(motion(0, 1)).wheel).collect();
    assert_eq!(wheels, vec![0, 0, 0, 0, -1]);
}

#[test]
fn test_passthrough_after_release() {
    let mut adept = Adept::default();
    let mut host = TestHost::default();
    let key = CustomKeycode::DragScroll.keycode();

    let report = adept.pointing_task(motion(4, -3));
    assert_eq!(fields(&report), (4, -3, 0, 0));

    adept.process_record(key, true, &mut host);
    adept.pointing_task(motion(4, -3));
    adept.process_record(key, false, &mut host);

    let report = adept.pointing_task(MouseReport {
        buttons: 0b10,
        x: 4,
        y: -3,
        wheel: 1,
        pan: 0,
    });
    assert_eq!(report.buttons, 0b10);
    assert_eq!(fields(&report), (4, -3, 0, 1));
}

#[test]
fn test_configure_scroll_while_dragging() {
    let mut adept = Adept::default();
    let keymap = AdeptKeymap::default();
    let mut host = TestHost::default();
    adept.post_init(&mut host);

    // Hold drag scroll, the settings layer opens on top of the main layer
    assert_eq!(
        press(&mut adept, &keymap, &mut host, 2, true),
        KeyAction::Single(Action::Custom(CustomKeycode::DragScroll))
    );
    assert_eq!(
        keymap.action_at(0, 0, &host.layers),
        Some(KeyAction::Single(Action::Key(KeyCode::Bootloader)))
    );
    assert_eq!(
        press(&mut adept, &keymap, &mut host, 1, true),
        KeyAction::Single(Action::Custom(CustomKeycode::Compile))
    );
    press(&mut adept, &keymap, &mut host, 1, false);
    assert_eq!(host.typed.len(), 1);

    let report = adept.pointing_task(motion(0, 15));
    assert_eq!(fields(&report), (0, 0, 0, -3));

    // Let go, the main layer is back and motion moves the cursor again
    press(&mut adept, &keymap, &mut host, 2, false);
    assert_eq!(host.layers.highest(), 0);
    assert_eq!(
        keymap.action_at(0, 0, &host.layers),
        Some(KeyAction::TapHold(
            Action::Key(KeyCode::MouseBtn4),
            Action::LayerOn(SCROLL_SETTINGS)
        ))
    );
    let report = adept.pointing_task(motion(0, 15));
    assert_eq!(fields(&report), (0, 15, 0, 0));
}

#[test]
fn test_scroll_settings_layer() {
    let mut adept = Adept::default();
    let keymap = AdeptKeymap::default();
    let mut host = TestHost::default();

    // The host activates the layer when the tap-hold key on column 0 is held
    host.layer_on(SCROLL_SETTINGS);
    press(&mut adept, &keymap, &mut host, 1, true);
    press(&mut adept, &keymap, &mut host, 1, false);
    press(&mut adept, &keymap, &mut host, 5, true);
    press(&mut adept, &keymap, &mut host, 5, false);
    host.layer_off(SCROLL_SETTINGS);
    assert_eq!(adept.scroll().divisor(), 4.0);
    assert!(!adept.scroll().invert());

    press(&mut adept, &keymap, &mut host, 2, true);
    // 10 / 4 = 2.5, not inverted any more
    let report = adept.pointing_task(motion(10, 10));
    assert_eq!(fields(&report), (0, 0, 2, 2));
    assert_eq!(adept.scroll().remainder(), (0.5, 0.5));
}

#[test]
fn test_cpi_signal_to_sensor_task() {
    static CPI: Signal<CriticalSectionRawMutex, u16> = Signal::new();

    let mut adept = Adept::default();
    let mut host = TestHost::default();
    let mut sensor = &CPI;

    adept.post_init(&mut sensor);
    assert_eq!(block_on(CPI.wait()), 400);

    adept.process_record(CustomKeycode::DpiUp.keycode(), true, &mut host);
    assert_eq!(host.last_cpi(), Some(600));
    adept.post_init(&mut sensor);
    assert_eq!(block_on(CPI.wait()), 400);
}

/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a host key. For example, `k!(MouseBtn1)` represents `KeyAction::Single(Action::Key(KeyCode::MouseBtn1))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::$k))
    };
}

/// Create a custom key. For example, `c!(DpiUp)` represents `KeyAction::Single(Action::Custom(CustomKeycode::DpiUp))`
#[macro_export]
macro_rules! c {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Custom($crate::keycode::CustomKeycode::$k))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action or tap key(tap/hold)
#[macro_export]
macro_rules! lt {
    ($x: expr, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::$k),
            $crate::action::Action::LayerOn($x),
        )
    };
}

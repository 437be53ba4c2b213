//! Global hotkey identification and matching.

use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rdev::{Button, EventType, Key};

use crate::clicker::ClickLoop;
use crate::state::SessionState;

/// Delay before the global hook is armed at startup, so the window is up
/// before events start flowing.
const ARM_DELAY: Duration = Duration::from_millis(300);

/// Pause before re-registering the hook after a failure.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// A configured trigger: one keyboard key or one mouse button. The textual
/// form is what the config file stores — bare key names like `"f6"`, mouse
/// buttons as `"Button.right"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Key(String),
    MouseButton(String),
}

impl Trigger {
    /// Parse the config file form. Anything without the `Button.` prefix is
    /// treated as a keyboard key name.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix("Button.") {
            Some(name) => Trigger::MouseButton(name.to_string()),
            None => Trigger::Key(raw.to_string()),
        }
    }

    pub fn from_key(key: Key) -> Self {
        Trigger::Key(key_name(key))
    }

    pub fn from_button(button: Button) -> Self {
        Trigger::MouseButton(button_name(button))
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Key(name) => write!(f, "{name}"),
            Trigger::MouseButton(name) => write!(f, "Button.{name}"),
        }
    }
}

/// Outcome of feeding one pressed input event through the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The event became the new trigger. It is consumed: no toggle.
    Captured,
    /// The event matched the configured trigger; the caller toggles the loop.
    Matched,
    Ignored,
}

/// Apply one pressed input event to the session. Capture takes precedence
/// over matching, so the capturing event can never also toggle.
pub fn observe(state: &SessionState, event: Trigger) -> Observation {
    if state.capturing.load(Ordering::SeqCst) {
        state.set_trigger(event);
        state.capturing.store(false, Ordering::SeqCst);
        Observation::Captured
    } else if state.trigger() == event {
        Observation::Matched
    } else {
        Observation::Ignored
    }
}

/// Spawn the global input hook thread. Keyboard and mouse press events feed
/// [`observe`]; `on_change` is called whenever the session state changed so
/// the GUI can repaint. The hook is re-registered after failures rather than
/// taking the feature down.
pub fn spawn_listener<F>(state: Arc<SessionState>, clicker: ClickLoop, on_change: F)
where
    F: Fn() + Clone + Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(ARM_DELAY);
        loop {
            let state = state.clone();
            let clicker = clicker.clone();
            let on_change = on_change.clone();
            let result = rdev::listen(move |event| {
                handle_event(&state, &clicker, &on_change, event.event_type)
            });
            match result {
                Ok(()) => tracing::warn!("input hook exited; restarting shortly"),
                Err(err) => tracing::warn!("input hook failed: {err:?}; retrying shortly"),
            }
            thread::sleep(RETRY_DELAY);
        }
    });
}

fn handle_event<F: Fn()>(
    state: &SessionState,
    clicker: &ClickLoop,
    on_change: &F,
    event: EventType,
) {
    // only press transitions matter; releases and motion are dropped here
    let trigger = match event {
        EventType::KeyPress(key) => Trigger::from_key(key),
        EventType::ButtonPress(button) => Trigger::from_button(button),
        _ => return,
    };

    match observe(state, trigger) {
        Observation::Captured => on_change(),
        Observation::Matched => {
            clicker.toggle();
            on_change();
        }
        Observation::Ignored => {}
    }
}

/// Normalized lowercase name for a keyboard key, matching what the config
/// file stores ("f6", "space", "a", ...).
fn key_name(key: Key) -> String {
    let name = match key {
        Key::Alt => "alt",
        Key::AltGr => "alt_gr",
        Key::Backspace => "backspace",
        Key::CapsLock => "caps_lock",
        Key::ControlLeft => "ctrl_l",
        Key::ControlRight => "ctrl_r",
        Key::Delete => "delete",
        Key::DownArrow => "down",
        Key::End => "end",
        Key::Escape => "esc",
        Key::F1 => "f1",
        Key::F2 => "f2",
        Key::F3 => "f3",
        Key::F4 => "f4",
        Key::F5 => "f5",
        Key::F6 => "f6",
        Key::F7 => "f7",
        Key::F8 => "f8",
        Key::F9 => "f9",
        Key::F10 => "f10",
        Key::F11 => "f11",
        Key::F12 => "f12",
        Key::Home => "home",
        Key::Insert => "insert",
        Key::LeftArrow => "left",
        Key::MetaLeft => "cmd",
        Key::MetaRight => "cmd_r",
        Key::NumLock => "num_lock",
        Key::PageDown => "page_down",
        Key::PageUp => "page_up",
        Key::Pause => "pause",
        Key::PrintScreen => "print_screen",
        Key::Return => "enter",
        Key::RightArrow => "right",
        Key::ScrollLock => "scroll_lock",
        Key::ShiftLeft => "shift",
        Key::ShiftRight => "shift_r",
        Key::Space => "space",
        Key::Tab => "tab",
        Key::UpArrow => "up",
        Key::KeyA => "a",
        Key::KeyB => "b",
        Key::KeyC => "c",
        Key::KeyD => "d",
        Key::KeyE => "e",
        Key::KeyF => "f",
        Key::KeyG => "g",
        Key::KeyH => "h",
        Key::KeyI => "i",
        Key::KeyJ => "j",
        Key::KeyK => "k",
        Key::KeyL => "l",
        Key::KeyM => "m",
        Key::KeyN => "n",
        Key::KeyO => "o",
        Key::KeyP => "p",
        Key::KeyQ => "q",
        Key::KeyR => "r",
        Key::KeyS => "s",
        Key::KeyT => "t",
        Key::KeyU => "u",
        Key::KeyV => "v",
        Key::KeyW => "w",
        Key::KeyX => "x",
        Key::KeyY => "y",
        Key::KeyZ => "z",
        Key::Num0 => "0",
        Key::Num1 => "1",
        Key::Num2 => "2",
        Key::Num3 => "3",
        Key::Num4 => "4",
        Key::Num5 => "5",
        Key::Num6 => "6",
        Key::Num7 => "7",
        Key::Num8 => "8",
        Key::Num9 => "9",
        Key::BackQuote => "`",
        Key::Minus => "-",
        Key::Equal => "=",
        Key::LeftBracket => "[",
        Key::RightBracket => "]",
        Key::SemiColon => ";",
        Key::Quote => "'",
        Key::BackSlash => "\\",
        Key::IntlBackslash => "\\",
        Key::Comma => ",",
        Key::Dot => ".",
        Key::Slash => "/",
        Key::KpReturn => "kp_enter",
        Key::KpMinus => "kp_minus",
        Key::KpPlus => "kp_plus",
        Key::KpMultiply => "kp_multiply",
        Key::KpDivide => "kp_divide",
        Key::KpDelete => "kp_delete",
        Key::Kp0 => "kp_0",
        Key::Kp1 => "kp_1",
        Key::Kp2 => "kp_2",
        Key::Kp3 => "kp_3",
        Key::Kp4 => "kp_4",
        Key::Kp5 => "kp_5",
        Key::Kp6 => "kp_6",
        Key::Kp7 => "kp_7",
        Key::Kp8 => "kp_8",
        Key::Kp9 => "kp_9",
        Key::Unknown(code) => return format!("key_{code}"),
        other => return format!("{other:?}").to_ascii_lowercase(),
    };
    name.to_string()
}

fn button_name(button: Button) -> String {
    match button {
        Button::Left => "left".to_string(),
        Button::Right => "right".to_string(),
        Button::Middle => "middle".to_string(),
        Button::Unknown(code) => format!("{code}"),
    }
}

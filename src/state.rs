//! Shared session state. The GUI owns it behind an `Arc`; the click worker
//! and the input hook thread read and update it concurrently.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::clicker::ClickButton;
use crate::delay::DelayFields;
use crate::settings::Settings;
use crate::trigger::Trigger;

pub struct SessionState {
    /// Click loop active. Polled by the worker between sleeps, so stopping
    /// takes effect only after the current sleep elapses.
    pub running: AtomicBool,
    /// Waiting for the next input event to become the new trigger.
    pub capturing: AtomicBool,
    trigger: Mutex<Trigger>,
    click_button: Mutex<ClickButton>,
    delay: Mutex<DelayFields>,
}

impl SessionState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            running: AtomicBool::new(false),
            capturing: AtomicBool::new(false),
            trigger: Mutex::new(Trigger::parse(&settings.hotkey)),
            click_button: Mutex::new(ClickButton::parse(&settings.click)),
            delay: Mutex::new(DelayFields {
                hours: settings.h.clone(),
                minutes: settings.m.clone(),
                seconds: settings.s.clone(),
                millis: settings.ms.clone(),
            }),
        }
    }

    /// Snapshot for persistence. Background path and window size live in the
    /// GUI shell, so the caller supplies them.
    pub fn to_settings(&self, bg: String, win_w: u32, win_h: u32) -> Settings {
        let delay = self.delay_fields();
        Settings {
            hotkey: self.trigger().to_string(),
            h: delay.hours,
            m: delay.minutes,
            s: delay.seconds,
            ms: delay.millis,
            click: self.click_button().as_str().to_string(),
            bg,
            win_w,
            win_h,
        }
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger.lock().unwrap().clone()
    }

    pub fn set_trigger(&self, trigger: Trigger) {
        *self.trigger.lock().unwrap() = trigger;
    }

    pub fn click_button(&self) -> ClickButton {
        *self.click_button.lock().unwrap()
    }

    pub fn set_click_button(&self, button: ClickButton) {
        *self.click_button.lock().unwrap() = button;
    }

    pub fn delay_fields(&self) -> DelayFields {
        self.delay.lock().unwrap().clone()
    }

    pub fn set_delay_fields(&self, fields: DelayFields) {
        *self.delay.lock().unwrap() = fields;
    }

    /// Arm hotkey capture. Idempotent while a capture is already pending.
    pub fn begin_capture(&self) {
        self.capturing.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_map_into_state_and_back() {
        let settings = Settings {
            hotkey: "Button.right".into(),
            h: "1".into(),
            m: "2".into(),
            s: "3".into(),
            ms: "400".into(),
            click: "right".into(),
            bg: "bg.png".into(),
            win_w: 640,
            win_h: 480,
        };

        let state = SessionState::from_settings(&settings);
        assert_eq!(state.trigger(), Trigger::parse("Button.right"));
        assert_eq!(state.click_button(), ClickButton::Right);

        let back = state.to_settings("bg.png".into(), 640, 480);
        assert_eq!(back, settings);
    }

    #[test]
    fn begin_capture_is_idempotent() {
        let state = SessionState::from_settings(&Settings::default());
        state.begin_capture();
        state.begin_capture();
        assert!(state.capturing.load(Ordering::SeqCst));
    }
}

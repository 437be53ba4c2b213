//! Background click worker.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rdev::{simulate, EventType};

use crate::state::SessionState;

/// Gap between the simulated press and release so the OS delivers both.
const PRESS_GAP: Duration = Duration::from_millis(1);

/// Which mouse button the loop presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickButton {
    #[default]
    Left,
    Right,
}

impl ClickButton {
    /// Parse the config file form; anything unrecognized falls back to left.
    pub fn parse(raw: &str) -> Self {
        if raw == "right" {
            ClickButton::Right
        } else {
            ClickButton::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClickButton::Left => "left",
            ClickButton::Right => "right",
        }
    }

    fn to_rdev(self) -> rdev::Button {
        match self {
            ClickButton::Left => rdev::Button::Left,
            ClickButton::Right => rdev::Button::Right,
        }
    }
}

/// Injection seam so tests can count clicks without touching the OS.
pub trait ClickSink: Send + Sync {
    fn click(&self, button: ClickButton) -> anyhow::Result<()>;
}

/// Production sink: one press/release pair through the OS event queue.
pub struct RdevClickSink;

impl ClickSink for RdevClickSink {
    fn click(&self, button: ClickButton) -> anyhow::Result<()> {
        let button = button.to_rdev();
        simulate(&EventType::ButtonPress(button))
            .map_err(|err| anyhow::anyhow!("button press failed: {err:?}"))?;
        thread::sleep(PRESS_GAP);
        simulate(&EventType::ButtonRelease(button))
            .map_err(|err| anyhow::anyhow!("button release failed: {err:?}"))?;
        Ok(())
    }
}

/// Handle that flips the running flag. Cheap to clone into the hook thread;
/// all clones share the same state and sink.
#[derive(Clone)]
pub struct ClickLoop {
    state: Arc<SessionState>,
    sink: Arc<dyn ClickSink>,
}

impl ClickLoop {
    pub fn new(state: Arc<SessionState>, sink: Arc<dyn ClickSink>) -> Self {
        Self { state, sink }
    }

    /// Flip the running flag. Starting spawns a fresh worker; stopping lets
    /// the current worker notice the flag once its sleep elapses, so stop
    /// latency is at most one delay interval.
    pub fn toggle(&self) {
        let was_running = self.state.running.fetch_xor(true, Ordering::SeqCst);
        if was_running {
            tracing::debug!("click loop stopping after current sleep");
        } else {
            self.spawn_worker();
        }
    }

    fn spawn_worker(&self) {
        let state = self.state.clone();
        let sink = self.sink.clone();
        thread::spawn(move || {
            tracing::debug!("click worker started");
            while state.running.load(Ordering::SeqCst) {
                if let Err(err) = sink.click(state.click_button()) {
                    tracing::warn!("click simulation failed: {err:#}");
                }
                // delay is re-read every iteration so live edits apply
                thread::sleep(state.delay_fields().duration());
            }
            tracing::debug!("click worker exited");
        });
    }
}

// Hide the console window in release mode
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod background;
mod clicker;
mod delay;
mod gui;
mod logging;
mod settings;
mod state;
mod trigger;

use eframe::egui;

use crate::gui::{AutoClickerApp, MIN_WINDOW_SIZE};
use crate::settings::Settings;

fn main() -> eframe::Result<()> {
    logging::init();

    let settings_path = settings::default_path();
    let settings = Settings::load(&settings_path);
    tracing::debug!("settings path: {}", settings_path.display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.win_w as f32, settings.win_h as f32])
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "AutoClicker",
        native_options,
        Box::new(move |cc| Box::new(AutoClickerApp::new(cc, &settings, settings_path))),
    )
}

//! Main window: widget composition and wiring.

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use eframe::egui;

use crate::background::BackgroundRenderer;
use crate::clicker::{ClickButton, ClickLoop, RdevClickSink};
use crate::settings::Settings;
use crate::state::SessionState;
use crate::trigger;

pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

pub struct AutoClickerApp {
    state: Arc<SessionState>,
    clicker: ClickLoop,
    background: BackgroundRenderer,
    settings_path: PathBuf,
}

impl AutoClickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, settings_path: PathBuf) -> Self {
        apply_style(&cc.egui_ctx);

        let state = Arc::new(SessionState::from_settings(settings));
        let clicker = ClickLoop::new(state.clone(), Arc::new(RdevClickSink));

        let mut background = BackgroundRenderer::new();
        if !settings.bg.is_empty() && Path::new(&settings.bg).exists() {
            if let Err(err) = background.set_image(Path::new(&settings.bg)) {
                tracing::warn!("could not restore background: {err:#}");
            }
        }

        let ctx = cc.egui_ctx.clone();
        trigger::spawn_listener(state.clone(), clicker.clone(), move || ctx.request_repaint());

        Self {
            state,
            clicker,
            background,
            settings_path,
        }
    }

    fn pick_background(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file();
        if let Some(path) = picked {
            if let Err(err) = self.background.set_image(&path) {
                tracing::warn!("could not load background {}: {err:#}", path.display());
            }
        }
    }

    fn save_settings(&self, ctx: &egui::Context) {
        let size = ctx.screen_rect().size();
        let settings = self.state.to_settings(
            self.background.path().to_string(),
            size.x.round() as u32,
            size.y.round() as u32,
        );
        if let Err(err) = settings.save(&self.settings_path) {
            tracing::warn!("could not save settings: {err:#}");
        }
    }
}

impl eframe::App for AutoClickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_settings(ctx);
        }

        let size = ctx.screen_rect().size();
        self.background.update(ctx, [size.x as u32, size.y as u32]);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::same(30.0)))
            .show(ctx, |ui| {
                if let Some(texture) = self.background.texture() {
                    ui.painter().image(
                        texture.id(),
                        ctx.screen_rect(),
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }

                ui.horizontal(|ui| {
                    if ui.button("Change Background").clicked() {
                        self.pick_background();
                    }

                    let hotkey_label = if self.state.capturing.load(Ordering::SeqCst) {
                        "Press any key or mouse button...".to_string()
                    } else {
                        format!("Hotkey: {}", self.state.trigger())
                    };
                    if ui.button(hotkey_label).clicked() {
                        self.state.begin_capture();
                    }
                });

                ui.horizontal(|ui| {
                    let current = self.state.click_button();
                    let left_label = if current == ClickButton::Left {
                        "Left \u{2714}"
                    } else {
                        "Left Click"
                    };
                    let right_label = if current == ClickButton::Right {
                        "Right \u{2714}"
                    } else {
                        "Right Click"
                    };
                    if ui.button(left_label).clicked() {
                        self.state.set_click_button(ClickButton::Left);
                    }
                    if ui.button(right_label).clicked() {
                        self.state.set_click_button(ClickButton::Right);
                    }
                });

                ui.horizontal(|ui| {
                    let mut fields = self.state.delay_fields();
                    let mut changed = false;
                    for (text, hint) in [
                        (&mut fields.hours, "Hours"),
                        (&mut fields.minutes, "Minutes"),
                        (&mut fields.seconds, "Seconds"),
                        (&mut fields.millis, "Ms"),
                    ] {
                        let edit = egui::TextEdit::singleline(text)
                            .hint_text(hint)
                            .desired_width(80.0);
                        changed |= ui.add(edit).changed();
                    }
                    if changed {
                        self.state.set_delay_fields(fields);
                    }
                });

                let start_label = if self.state.running.load(Ordering::SeqCst) {
                    "Stop"
                } else {
                    "Start"
                };
                let start = egui::Button::new(start_label);
                if ui.add_sized([ui.available_width(), 36.0], start).clicked() {
                    self.clicker.toggle();
                }
            });
    }
}

fn apply_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.widgets.inactive.rounding = egui::Rounding::same(14.0);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(14.0);
    style.visuals.widgets.active.rounding = egui::Rounding::same(14.0);
    style.spacing.button_padding = egui::vec2(10.0, 8.0);
    style.spacing.item_spacing = egui::vec2(15.0, 15.0);
    ctx.set_style(style);
}

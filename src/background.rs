//! Window background image: decode once, rescale to the window size.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use eframe::egui;
use image::imageops::FilterType;
use image::DynamicImage;

/// Quiet period after the last size change before re-rendering, so drag
/// resizing does not rescale every intermediate frame.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(30);

/// Rescale to exactly `width x height` and pack as RGB for the GUI layer.
pub fn rescale(image: &DynamicImage, width: u32, height: u32) -> egui::ColorImage {
    let rgb = image.resize_exact(width, height, FilterType::Lanczos3).to_rgb8();
    egui::ColorImage::from_rgb([width as usize, height as usize], rgb.as_raw())
}

#[derive(Default)]
pub struct BackgroundRenderer {
    path: String,
    image: Option<DynamicImage>,
    texture: Option<egui::TextureHandle>,
    rendered: Option<[u32; 2]>,
    /// Target size and deadline of a debounced re-render.
    pending: Option<([u32; 2], Instant)>,
}

impl BackgroundRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the current image, empty when none is set. Persisted in the
    /// config file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decode `path` fully into memory. On failure the previous background
    /// stays in place.
    pub fn set_image(&mut self, path: &Path) -> anyhow::Result<()> {
        let image = image::open(path)
            .with_context(|| format!("decode background image {}", path.display()))?;
        self.image = Some(image);
        self.path = path.to_string_lossy().into_owned();
        self.texture = None;
        self.rendered = None;
        self.pending = None;
        Ok(())
    }

    /// Per-frame upkeep. The first render after an image is set happens
    /// immediately; later size changes wait out the debounce window, and a
    /// new size while one is pending restarts it.
    pub fn update(&mut self, ctx: &egui::Context, size: [u32; 2]) {
        if self.image.is_none() {
            return;
        }
        let size = [size[0].max(1), size[1].max(1)];
        if self.rendered == Some(size) {
            self.pending = None;
            return;
        }

        let now = Instant::now();
        match self.pending {
            None if self.rendered.is_none() => self.render(ctx, size),
            Some((target, deadline)) if target == size => {
                if now >= deadline {
                    self.render(ctx, size);
                } else {
                    ctx.request_repaint_after(deadline - now);
                }
            }
            _ => {
                self.pending = Some((size, now + RESIZE_DEBOUNCE));
                ctx.request_repaint_after(RESIZE_DEBOUNCE);
            }
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    fn render(&mut self, ctx: &egui::Context, size: [u32; 2]) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        let pixels = rescale(image, size[0], size[1]);
        self.texture = Some(ctx.load_texture("background", pixels, egui::TextureOptions::LINEAR));
        self.rendered = Some(size);
        self.pending = None;
    }
}

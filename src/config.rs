use std::path::PathBuf;

use eframe::egui;

use crate::shaders::ColoringMode;
use crate::view::ViewState;

/// Everything the viewer is started with. There is no config file, flag or
/// environment variable; these are the compiled-in values.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: (f32, f32), // Logical points
    pub resizable: bool,
    pub palette_path: PathBuf,
    /// Clear colour behind the fractal quad.
    pub background: [f32; 3],
    pub initial_view: InitialView,
    pub zoom: ZoomFactors,
    pub coloring: ColoringMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialView {
    pub center: (f64, f64),
    pub scale: f64,
    pub iterations: u32,
}

/// Scale multipliers applied per scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactors {
    pub scroll_up: f64,
    pub scroll_down: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Mandelbrot".to_owned(),
            window_size: (1280.0, 720.0),
            resizable: true,
            palette_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pal.png")),
            background: [1.0, 1.0, 1.0],
            initial_view: InitialView::default(),
            zoom: ZoomFactors::default(),
            coloring: ColoringMode::EscapeTime,
        }
    }
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center: (0.5, 0.0),
            scale: 1.5,
            iterations: 100,
        }
    }
}

impl Default for ZoomFactors {
    fn default() -> Self {
        Self {
            scroll_up: 1.05,
            scroll_down: 0.95,
        }
    }
}

impl ViewerConfig {
    pub fn initial_aspect_ratio(&self) -> f64 {
        f64::from(self.window_size.0) / f64::from(self.window_size.1)
    }

    pub fn initial_view_state(&self) -> ViewState {
        ViewState::new(
            self.initial_view.center,
            self.initial_view.scale,
            self.initial_view.iterations,
            self.initial_aspect_ratio(),
        )
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(self.window_size.0, self.window_size.1))
                .with_resizable(self.resizable)
                .with_title(self.title.clone()),
            vsync: true,
            depth_buffer: 0,
            stencil_buffer: 0,
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        }
    }
}

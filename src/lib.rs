//! Interactive Mandelbrot viewer: a GLSL fragment shader draws the set,
//! egui panels report the view, and scroll/click input pans and zooms.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod mapping;
pub mod overlay;
pub mod palette;
pub mod render;
pub mod shaders;
pub mod view;

pub use app::ViewerApp;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use input::{Interaction, Outcome, ViewerEvent};
pub use mapping::{screen_to_fractal, WindowSize};
pub use view::{PointerState, ViewState, MAX_ITERATIONS};

use std::path::PathBuf;

use thiserror::Error;

/// Startup failures. Every one of these is fatal: the app creator hands it
/// back to eframe and the process exits.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("GL context not available, the glow renderer is required")]
    NoGlContext,

    #[error("failed to load palette {path}: {source}")]
    PaletteLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("palette image {0} has zero width")]
    EmptyPalette(PathBuf),

    #[error("shader compilation failed ({stage}): {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("program linking failed: {0}")]
    ProgramLink(String),

    #[error("failed to create {what}: {reason}")]
    GlResource { what: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

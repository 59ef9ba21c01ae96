// File: crates/rps-chart-core/src/error.rs
// Summary: Error type for the render pipeline (surface, encode, file write).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The CPU raster surface could not be created or read back.
    #[error("raster surface failed: {0}")]
    Surface(String),

    #[error("encode PNG failed")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

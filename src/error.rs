use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Rejected before any pixel is traced.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

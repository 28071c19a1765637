use liquid_layout::LayoutError;
use thiserror::Error;

/// Everything that can go wrong between reading a descriptor and handing
/// back the resolved rectangles.
#[derive(Error, Debug)]
pub enum LiquidError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Descriptor is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

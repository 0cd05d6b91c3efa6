//! QR renderer trait and error types.

use std::fmt;

/// Errors that can occur while rendering a QR image.
#[derive(Debug)]
pub enum QrError {
    EncodingError(String),
    ImageError(String),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EncodingError(e) => write!(f, "QR encoding error: {}", e),
            Self::ImageError(e) => write!(f, "QR image error: {}", e),
        }
    }
}

impl std::error::Error for QrError {}

/// Result type for QR rendering.
pub type QrResult<T> = Result<T, QrError>;

/// Turns a string into a scannable PNG image.
///
/// Rendering is CPU-only and short, so the trait is synchronous.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrRenderer`] - `qrcode` + `image` PNG output
pub trait QrRenderer: Send + Sync {
    /// Encodes `data` and returns the PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::EncodingError`] if `data` does not fit in a QR code,
    /// [`QrError::ImageError`] if PNG encoding fails.
    fn render_png(&self, data: &str) -> QrResult<Vec<u8>>;
}

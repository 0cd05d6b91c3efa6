//! PNG QR renderer built on the `qrcode` and `image` crates.

use super::service::{QrError, QrRenderer, QrResult};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Smallest edge, in pixels, of a rendered image.
const MIN_DIMENSION: u32 = 256;

/// Renders black-on-white PNG QR codes with a quiet zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngQrRenderer;

impl PngQrRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl QrRenderer for PngQrRenderer {
    fn render_png(&self, data: &str) -> QrResult<Vec<u8>> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| QrError::EncodingError(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| QrError::ImageError(e.to_string()))?;

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_renders_png() {
        let bytes = PngQrRenderer::new().render_png("/r/abc123").unwrap();
        assert!(bytes.starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn test_image_has_minimum_size() {
        let bytes = PngQrRenderer::new()
            .render_png("http://localhost:8080/r/abc123")
            .unwrap();
        let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();

        assert!(image.width() >= MIN_DIMENSION);
        assert!(image.height() >= MIN_DIMENSION);
    }

    #[test]
    fn test_oversized_payload_is_encoding_error() {
        let data = "x".repeat(8000);
        let err = PngQrRenderer::new().render_png(&data).unwrap_err();
        assert!(matches!(err, QrError::EncodingError(_)));
    }
}

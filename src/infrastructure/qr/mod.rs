//! QR image rendering.
//!
//! Provides a [`QrRenderer`] trait with a PNG implementation, [`PngQrRenderer`].

mod png_renderer;
mod service;

pub use png_renderer::PngQrRenderer;
pub use service::{QrError, QrRenderer, QrResult};

//! QR Code Rendering
//!
//! Turns short strings (verification URLs) into PNG images suitable for
//! printing on stickers or embedding in dashboards.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use thiserror::Error;

/// Minimum edge length of the rendered image in pixels
const MIN_DIMENSIONS: u32 = 360;

#[derive(Debug, Error)]
pub enum QrRenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Render `data` as a QR code and return the PNG bytes
pub fn render_png(data: &str) -> Result<Vec<u8>, QrRenderError> {
    let code = QrCode::new(data.as_bytes())?;
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSIONS, MIN_DIMENSIONS)
        .build();

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_render_png_produces_png_bytes() {
        let png = render_png("https://example.com/api/v/QUJDMTIz.c2ln").unwrap();
        assert!(png.len() > PNG_SIGNATURE.len());
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_render_png_is_deterministic() {
        let a = render_png("same input").unwrap();
        let b = render_png("same input").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_png_rejects_oversized_data() {
        // Exceeds the byte capacity of the largest QR version
        let data = "a".repeat(4000);
        assert!(render_png(&data).is_err());
    }
}

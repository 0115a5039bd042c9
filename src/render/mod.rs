//! The generation pipeline: QR encoding and logo compositing.

pub mod compositor;
pub mod encoder;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::core::error::{AppError, AppResult};
use crate::core::models::EncodeRequest;

pub use compositor::{circle_radius, logo_target_size, overlay_logo, CIRCLE_PADDING, LOGO_RATIO};
pub use encoder::encode;

/// Default filename for exported composites.
pub const OUTPUT_FILENAME: &str = "qr-code-with-logo.png";

/// Run the whole pipeline: validate, decode the logo, encode the QR symbol,
/// composite, PNG-encode.
///
/// Pure and idempotent; identical inputs produce byte-identical PNGs. An
/// error at any step yields `Err` with no partial output.
pub fn generate_composite(request: &EncodeRequest, logo_bytes: &[u8]) -> AppResult<Vec<u8>> {
    request.validate()?;

    // Decode the logo before any encoding work so an unreadable file ends
    // the attempt without touching anything else.
    let logo = image::load_from_memory(logo_bytes)?;
    debug!("Decoded logo: {}x{}", logo.width(), logo.height());

    let qr = encoder::encode(request)?;
    let composite = compositor::overlay_logo(&qr, &logo);
    encode_png(&composite)
}

/// Encode a raster as a PNG byte stream.
pub fn encode_png(img: &RgbaImage) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::Server(format!("PNG encoding failed: {}", e)))?;
    Ok(bytes)
}

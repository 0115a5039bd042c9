use image::{Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use crate::core::error::AppResult;
use crate::core::models::EncodeRequest;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterize the request payload as a QR symbol.
///
/// The output is exactly `module_dimension` pixels square, fully opaque,
/// with the quiet zone folded into that fixed dimension. Modules are scaled
/// fractionally (each output pixel maps back to the module under it), the
/// way a canvas renderer scales to a requested width.
pub fn encode(request: &EncodeRequest) -> AppResult<RgbaImage> {
    request.validate()?;

    let code = QrCode::with_error_correction_level(
        request.payload.as_bytes(),
        request.level.to_ec_level(),
    )?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let margin = request.margin_modules;
    let total = module_count + 2 * margin;
    let dim = request.module_dimension;

    let mut img = RgbaImage::from_pixel(dim, dim, LIGHT);
    for (px, py, pixel) in img.enumerate_pixels_mut() {
        // Quiet-zone pixels fall outside the module grid and stay light.
        let mx = (px as u64 * total as u64 / dim as u64) as i64 - margin as i64;
        let my = (py as u64 * total as u64 / dim as u64) as i64 - margin as i64;
        if mx < 0 || my < 0 || mx >= module_count as i64 || my >= module_count as i64 {
            continue;
        }
        if modules[(my as u32 * module_count + mx as u32) as usize] == Color::Dark {
            *pixel = DARK;
        }
    }

    Ok(img)
}

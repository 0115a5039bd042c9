use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Fraction of the canvas width the logo occupies. Together with
/// error-correction level H this keeps the occluded area inside the
/// symbol's recovery budget, so the code stays scannable.
pub const LOGO_RATIO: f64 = 0.20;

/// Pixels of white padding between the logo square and the surrounding
/// QR modules.
pub const CIRCLE_PADDING: u32 = 8;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Side length of the logo square for a given canvas width.
pub fn logo_target_size(canvas_width: u32) -> u32 {
    (canvas_width as f64 * LOGO_RATIO) as u32
}

/// Radius of the white backing circle for a given canvas width.
pub fn circle_radius(canvas_width: u32) -> u32 {
    logo_target_size(canvas_width) / 2 + CIRCLE_PADDING
}

/// Composite a logo into the center of a QR raster.
///
/// Draw order is significant and must not change: the QR base layer, then
/// an opaque white circle at the center, then the logo on top of the
/// circle. The logo is stretched to a square without preserving its aspect
/// ratio.
pub fn overlay_logo(qr: &RgbaImage, logo: &DynamicImage) -> RgbaImage {
    let (width, height) = qr.dimensions();
    let mut canvas = qr.clone();

    let logo_size = logo_target_size(width);
    let radius = circle_radius(width);

    draw_filled_circle_mut(
        &mut canvas,
        ((width / 2) as i32, (height / 2) as i32),
        radius as i32,
        WHITE,
    );

    let resized = imageops::resize(logo, logo_size, logo_size, FilterType::Triangle);
    let logo_x = (width - logo_size) / 2;
    let logo_y = (height - logo_size) / 2;
    imageops::overlay(&mut canvas, &resized, logo_x as i64, logo_y as i64);

    canvas
}

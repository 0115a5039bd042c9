use anyhow::Result;
use qrcode::render::unicode;
use qrcode::QrCode;

/// Render the server URL as a terminal QR code so phones can open the
/// generator page directly.
pub fn terminal_qr_code(url: &str) -> Result<String> {
    let code = QrCode::new(url.as_bytes())?;
    let qr = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();

    let mut output = String::new();
    output.push('\n');
    output.push_str("Scan this QR code to open the generator:\n");
    output.push_str(&qr);
    output.push('\n');
    output.push_str(&format!("Or open: {}\n", url));

    Ok(output)
}

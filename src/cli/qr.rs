//! QR rendering for enrollment URIs
//!
//! Delegates the symbol math to the qrcode crate; this module only decides
//! how the matrix reaches the terminal or disk.

use image::Luma;
use qrcode::render::unicode;
use qrcode::QrCode;
use tracing::warn;

/// Print the URI as a scannable QR block, falling back to the bare URI text
pub fn print_terminal(uri: &str) {
    match QrCode::new(uri.as_bytes()) {
        Ok(code) => {
            // Inverted colors so the symbol stays scannable on dark
            // terminal themes
            let rendered = code
                .render::<unicode::Dense1x2>()
                .dark_color(unicode::Dense1x2::Light)
                .light_color(unicode::Dense1x2::Dark)
                .build();
            println!("{}", rendered);
        }
        Err(e) => {
            warn!("could not render QR code: {}", e);
            println!("(QR rendering failed; enter this URI manually)");
            println!("{}", uri);
        }
    }
}

/// Render the URI into a PNG file
pub fn save_png(uri: &str, path: &str) -> Result<(), String> {
    let code = QrCode::new(uri.as_bytes()).map_err(|e| e.to_string())?;
    let img = code.render::<Luma<u8>>().min_dimensions(300, 300).build();
    img.save(path).map_err(|e| e.to_string())
}

//! QR code rendering for short URLs.

use base64::Engine as _;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use serde_json::json;
use std::io::Cursor;

use crate::error::AppError;

/// Pixel size of one QR module.
const MODULE_SIZE: u32 = 10;

/// Renders `text` as a PNG QR code and returns it as a `data:` URI.
///
/// The output is a pure function of the input.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the text does not fit in a QR code or
/// PNG encoding fails; neither happens for URL-sized input.
pub fn render_data_uri(text: &str) -> Result<String, AppError> {
    let code = QrCode::new(text.as_bytes()).map_err(|e| {
        AppError::internal("Failed to encode QR code", json!({ "reason": e.to_string() }))
    })?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .quiet_zone(true)
        .build();

    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png).map_err(|e| {
        AppError::internal("Failed to render QR code", json!({ "reason": e.to_string() }))
    })?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(png.into_inner());
    Ok(format!("data:image/png;base64,{encoded}"))
}

//! Canned `generateContent` responses.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub(crate) const TEXT_PATH: &str = "/models/text-model:generateContent";
pub(crate) const IMAGE_PATH: &str = "/models/image-model:generateContent";

pub(crate) fn text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    })
    .to_string()
}

pub(crate) fn image_response(png: &[u8]) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [
            {"text": "Here is your vision."},
            {"inlineData": {"mimeType": "image/png", "data": STANDARD.encode(png)}}
        ]}}]
    })
    .to_string()
}

pub(crate) fn error_response(message: &str) -> String {
    serde_json::json!({"error": {"code": 500, "message": message}}).to_string()
}

/// A small solid PNG standing in for a generated background.
pub(crate) fn background_png() -> Vec<u8> {
    let image = RgbaImage::from_pixel(16, 9, Rgba([35, 129, 151, 255]));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).expect("encode test png");
    bytes.into_inner()
}

//! Image decode, optional transform, WebP re-encode and save.
//!
//! Decoding goes through the `image` crate (format sniffed from the bytes);
//! encoding uses libwebp via the `webp` crate so lossless mode, quality and
//! compression method can all be pinned per category.

mod error;

pub use error::TranscodeError;

use image::DynamicImage;
use std::path::{Path, PathBuf};

/// WebP encoder settings for one asset category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveParams {
    pub lossless: bool,
    /// 0-100. In lossless mode this trades encode time for size.
    pub quality: f32,
    /// Compression method 0 (fast) to 6 (slowest, smallest).
    pub method: i32,
}

/// Face portraits: lossless, quality 100, method 6.
pub const FACE_SAVE_PARAMS: SaveParams = SaveParams {
    lossless: true,
    quality: 100.0,
    method: 6,
};

/// Per-category image transform (resize, crop, ...), applied after decode.
pub trait ImageTransform {
    fn apply(&self, image: DynamicImage) -> DynamicImage;
}

impl<F> ImageTransform for F
where
    F: Fn(DynamicImage) -> DynamicImage,
{
    fn apply(&self, image: DynamicImage) -> DynamicImage {
        self(image)
    }
}

/// Decodes image bytes in any format the `image` crate recognizes.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, TranscodeError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Encodes `image` as WebP with `params`.
pub fn encode_webp(image: &DynamicImage, params: &SaveParams) -> Result<Vec<u8>, TranscodeError> {
    // libwebp only takes 8-bit RGB or RGBA.
    let image = if image.color().has_alpha() {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    };

    let encoder =
        webp::Encoder::from_image(&image).map_err(|e| TranscodeError::Encode(e.to_string()))?;
    let mut config = webp::WebPConfig::new()
        .map_err(|_| TranscodeError::Encode("invalid libwebp config".to_string()))?;
    config.lossless = i32::from(params.lossless);
    config.quality = params.quality;
    config.method = params.method;

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| TranscodeError::Encode(format!("{e:?}")))?;
    Ok(memory.to_vec())
}

/// Decode → transform → encode, without touching the filesystem.
pub fn transcode(
    bytes: &[u8],
    transform: Option<&dyn ImageTransform>,
    params: &SaveParams,
) -> Result<Vec<u8>, TranscodeError> {
    let mut image = decode(bytes)?;
    if let Some(t) = transform {
        image = t.apply(image);
    }
    encode_webp(&image, params)
}

/// Writes encoded bytes to `dir/filename` atomically, creating `dir` if needed.
pub fn save(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, TranscodeError> {
    let path = dir.join(filename);
    crate::storage::write_atomic(&path, bytes).map_err(|source| TranscodeError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Small opaque PNG with a gradient, for tests.
#[cfg(test)]
pub(crate) fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    use image::{ImageFormat, Rgba, RgbaImage};

    let img = RgbaImage::from_fn(w, h, |x, y| Rgba([(x * 17) as u8, (y * 29) as u8, 128, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

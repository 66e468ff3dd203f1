use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};

use crate::error::ConvertError;
use crate::format::WEBP_EXTENSION;
use crate::io::{read_file, remove_source, write_file};

/// A source file that was turned into WebP.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_size: u64,
    pub converted_size: u64,
    /// Whether the source was removed afterwards
    pub deleted: bool,
}

/// Sibling path with the extension swapped for `.webp`.
pub fn webp_destination(source: &Path) -> PathBuf {
    source.with_extension(WEBP_EXTENSION)
}

/// Convert one image to a lossy WebP sibling, optionally removing the source.
///
/// Any failure along the way (read, decode, encode, write, delete) comes back
/// as an error naming the file. A failed delete still leaves the `.webp` on disk.
pub fn convert_file(
    source: &Path,
    quality: u8,
    delete_original: bool,
) -> Result<Conversion, ConvertError> {
    if quality > 100 {
        return Err(ConvertError::InvalidQuality(quality));
    }

    let destination = webp_destination(source);

    let data = read_file(source)?;
    let original_size = data.len() as u64;

    // Format is sniffed from the bytes, not the extension
    let img = image::load_from_memory(&data).map_err(|e| ConvertError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;
    drop(data);

    log::debug!(
        "Decoded {}: {}x{} {:?}",
        source.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let img = normalize_color(img);
    let encoded = encode_webp(&img, quality, source)?;
    drop(img);

    if destination.exists() {
        log::warn!("Overwriting existing {}", destination.display());
    }
    write_file(&destination, &encoded)?;
    println!("Converted: {} -> {}", source.display(), destination.display());

    let deleted = if delete_original {
        remove_source(source)?;
        println!("Deleted: {}", source.display());
        true
    } else {
        false
    };

    Ok(Conversion {
        source: source.to_path_buf(),
        destination,
        original_size,
        converted_size: encoded.len() as u64,
        deleted,
    })
}

/// Collapse every color type into 8-bit RGBA (if it carries alpha) or 8-bit RGB.
pub fn normalize_color(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.into_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.into_rgb8())
    }
}

fn encode_webp(img: &DynamicImage, quality: u8, source: &Path) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = img.dimensions();

    let encoder = match img {
        DynamicImage::ImageRgba8(rgba) => webp::Encoder::from_rgba(rgba.as_raw(), width, height),
        DynamicImage::ImageRgb8(rgb) => webp::Encoder::from_rgb(rgb.as_raw(), width, height),
        other => {
            return Err(ConvertError::Encode {
                path: source.to_path_buf(),
                reason: format!("unexpected color type {:?}", other.color()),
            });
        }
    };

    let encoded = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| ConvertError::Encode {
            path: source.to_path_buf(),
            reason: format!("{:?}", e),
        })?;

    log::debug!("Encoded {} at quality {}: {} bytes", source.display(), quality, encoded.len());

    Ok(encoded.to_vec())
}

use image::imageops;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pixels removed from each border before content detection.
pub const INSET_MARGIN: u32 = 100;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Image is {width}x{height}, too small to apply an inset of {margin} pixels")]
    TooSmall { width: u32, height: u32, margin: u32 },

    #[error("No content found after the inset crop; the area inside the border may be fully transparent")]
    NoContent,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Bounding box (left, top, right, bottom) of all pixels with non-zero
/// alpha, right/bottom exclusive. `None` when the image is fully transparent.
pub fn alpha_bounding_box(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] > 0 {
            bounds = Some(match bounds {
                Some((left, top, right, bottom)) => {
                    (left.min(x), top.min(y), right.max(x + 1), bottom.max(y + 1))
                }
                None => (x, y, x + 1, y + 1),
            });
        }
    }

    bounds
}

/// Offset that centers a width x height image on a square canvas of the
/// given side, rounding down on odd leftovers.
pub fn centered_offset(side: u32, width: u32, height: u32) -> (u32, u32) {
    ((side - width) / 2, (side - height) / 2)
}

/// Crops the logo at `input_path` and writes the squared result to
/// `output_path`: removes the outer border, tightens to the visible
/// content, then centers it on a transparent square canvas.
///
/// Nothing is written unless every step succeeds.
pub fn crop_logo(input_path: &Path, output_path: &Path) -> Result<(), CropError> {
    println!("📁 Loading image from: {}", input_path.display());

    if !input_path.exists() {
        return Err(CropError::FileNotFound(input_path.to_path_buf()));
    }

    // Normalize palette/greyscale/RGB sources to RGBA up front
    let img = image::open(input_path)?.to_rgba8();
    let (width, height) = img.dimensions();

    if width <= 2 * INSET_MARGIN || height <= 2 * INSET_MARGIN {
        return Err(CropError::TooSmall {
            width,
            height,
            margin: INSET_MARGIN,
        });
    }

    println!("✂ Applying inset crop of {}px from all sides.", INSET_MARGIN);
    let inset = imageops::crop_imm(
        &img,
        INSET_MARGIN,
        INSET_MARGIN,
        width - 2 * INSET_MARGIN,
        height - 2 * INSET_MARGIN,
    )
    .to_image();

    let (left, top, right, bottom) = alpha_bounding_box(&inset).ok_or(CropError::NoContent)?;
    println!(
        "🔍 Content bounding box: ({}, {}, {}, {})",
        left, top, right, bottom
    );

    let content = imageops::crop_imm(&inset, left, top, right - left, bottom - top).to_image();
    let (content_width, content_height) = content.dimensions();

    let square_size = content_width.max(content_height);
    println!("🖼 Creating square canvas of size: {}x{}", square_size, square_size);

    // New buffer starts zeroed, i.e. fully transparent
    let mut canvas = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(square_size, square_size);
    let (offset_x, offset_y) = centered_offset(square_size, content_width, content_height);
    imageops::overlay(&mut canvas, &content, offset_x as i64, offset_y as i64);

    println!("💾 Saving cropped square image to: {}", output_path.display());
    canvas.save(output_path)?;

    Ok(())
}

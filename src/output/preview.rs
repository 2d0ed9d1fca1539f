use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::BlockfitError;
use crate::packing::{PlacedBlock, PlacementResult};

const BACKGROUND: Rgba<u8> = Rgba([32, 32, 32, 255]);

/// Display color for a block of the given placed size.
///
/// Blocks with the same dimensions share a color. The color only depends on
/// `seed` and the size, so previews are reproducible.
pub fn block_color(seed: u64, width: u32, height: u32) -> Rgba<u8> {
    let key = (u64::from(width) << 32) | u64::from(height);
    let [r, g, b, ..] = splitmix64(seed ^ key).to_le_bytes();
    // Keep colors away from the background
    Rgba([r | 0x40, g | 0x40, b | 0x40, 255])
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn outline(color: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    Rgba([r / 2, g / 2, b / 2, a])
}

/// Draw the placed blocks of a packing result, one pixel per cell
pub fn render_preview(result: &PlacementResult, seed: u64) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(
        result.container.width(),
        result.container.height(),
        BACKGROUND,
    );

    for block in &result.placed {
        draw_block(&mut image, block, block_color(seed, block.width, block.height));
    }

    image
}

fn draw_block(image: &mut RgbaImage, block: &PlacedBlock, fill: Rgba<u8>) {
    let rect = block.rect();
    let edge = outline(fill);

    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let on_edge =
                x == rect.x || y == rect.y || x + 1 == rect.right() || y + 1 == rect.bottom();
            image.put_pixel(x, y, if on_edge { edge } else { fill });
        }
    }
}

/// Save a rendered preview as PNG
pub fn save_preview(image: &RgbaImage, path: &Path) -> Result<(), BlockfitError> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BlockfitError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })
}

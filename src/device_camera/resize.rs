use crate::classifier::pixel_tensor_encoder::PixelBuffer;
use image::{imageops, DynamicImage};

/// Scales to fit inside `width`x`height`, centering non-square images on black.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() * height == image.height() * width {
        return image.resize_exact(width, height, imageops::FilterType::Triangle);
    }

    let (w, h) = (image.width() as f32, image.height() as f32);
    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = ((w * scale) as u32).clamp(1, width);
    let new_h = ((h * scale) as u32).clamp(1, height);

    let scaled = image
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();
    let mut padded = image::RgbImage::new(width, height);
    imageops::replace(
        &mut padded,
        &scaled,
        ((width - new_w) / 2) as i64,
        ((height - new_h) / 2) as i64,
    );

    DynamicImage::from(padded)
}

/// Packs RGB pixels as opaque `0xAARRGGBB`, row by row.
pub fn image_to_pixel_buffer(image: &DynamicImage) -> PixelBuffer {
    let rgb = image.to_rgb8();
    let pixels = rgb
        .pixels()
        .map(|p| 0xFF00_0000 | ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32))
        .collect();

    PixelBuffer::new(rgb.width(), rgb.height(), pixels)
}

pub fn resize_image_to_pixel_buffer(image: &DynamicImage, width: u32, height: u32) -> PixelBuffer {
    image_to_pixel_buffer(&resize_image(image, width, height))
}

use image::{ImageBuffer, Rgb};
use std::io::Cursor;
use tempfile::NamedTempFile;

/// Creates a 64x64 green PNG in memory, for building uploads directly.
pub fn png_bytes() -> Vec<u8> {
    let img = ImageBuffer::from_fn(64, 64, |_, _| Rgb([0u8, 255u8, 0u8]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode test image");
    bytes
}

/// Creates a 64x64 green test image on disk and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = ImageBuffer::from_fn(64, 64, |_, _| Rgb([0u8, 255u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a temp file that is not an image at all.
pub fn create_text_file() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp text file");
    std::fs::write(file.path(), b"definitely not a photo").expect("Failed to write temp text file");
    file
}

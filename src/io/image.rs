//! PNG loading and export for canvases

use crate::io::error::{Result, SynthesisError};
use crate::spatial::{Canvas, Color, Point};
use image::RgbaImage;
use std::path::Path;

/// Load an image file into a canvas
///
/// Any format the `image` crate decodes is accepted; all sources are
/// normalized to RGBA so indexed and grayscale images produce the same
/// channel-exact color keys a true-color source would.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_canvas<P: AsRef<Path>>(path: P) -> Result<Canvas> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SynthesisError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgba = img.to_rgba8();

    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let mut canvas = Canvas::transparent(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        canvas.set(Point::new(x as usize, y as usize), Color::from(*pixel));
    }

    Ok(canvas)
}

/// Export a canvas as a PNG image
///
/// Unpainted pixels keep their transparency. Parent directories are
/// created as needed.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png<P: AsRef<Path>>(canvas: &Canvas, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let width = canvas.width() as u32;
    let height = canvas.height() as u32;

    let mut img = RgbaImage::new(width, height);
    for (point, color) in canvas.pixels() {
        img.put_pixel(point.x as u32, point.y as u32, color.into());
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| SynthesisError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

//! PNG import and export of grids

use image::{ImageBuffer, ImageFormat, Rgba};
use std::path::Path;

use crate::io::configuration::{ALIVE_COLOR, ALIVE_LUMINANCE_THRESHOLD, DEAD_COLOR};
use crate::io::error::{LifeError, Result, invalid_parameter};
use crate::io::pattern::create_parent_dir;
use crate::spatial::grid::Grid;

/// Load a grid from a PNG image, one pixel per cell
///
/// A pixel is alive when it is dark (luminance below
/// `ALIVE_LUMINANCE_THRESHOLD`) and not fully transparent.
///
/// Pixel blocks are not collapsed: an image written by
/// [`export_grid_as_png`] with `scale` greater than one loads back as a grid
/// `scale` times larger in each dimension. Export with `scale = 1` to
/// round-trip a grid exactly.
///
/// # Errors
///
/// Returns `PatternLoad` if the image cannot be decoded and `MalformedGrid`
/// if its dimensions are unusable
pub fn load_grid_from_png(path: &Path) -> Result<Grid> {
    let img = image::open(path).map_err(|e| LifeError::PatternLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let luma = img.to_luma_alpha8();
    let (width, height) = luma.dimensions();

    Grid::from_fn(height as usize, width as usize, |row, col| {
        luma.get_pixel_checked(col as u32, row as u32)
            .is_some_and(|pixel| {
                let [luminance, alpha] = pixel.0;
                alpha > 0 && luminance < ALIVE_LUMINANCE_THRESHOLD
            })
    })
}

/// Export a grid as a PNG with each cell drawn as a `scale` x `scale` block
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or the scaled image would exceed `u32` dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, scale: u32, output_path: &Path) -> Result<()> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }

    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("scale", &scale, &"image dimensions overflow"))
    };
    let width = scaled(grid.cols())?;
    let height = scaled(grid.rows())?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let alive = grid.is_alive((y / scale) as usize, (x / scale) as usize);
        Rgba(if alive { ALIVE_COLOR } else { DEAD_COLOR })
    });

    create_parent_dir(output_path)?;

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| LifeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

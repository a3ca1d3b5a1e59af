//! Plaintext (`.cells`) pattern parsing and format dispatch for pattern files
//!
//! In the plaintext format each line is one grid row: `O` is a live cell and
//! `.` a dead one. Lines starting with `!` are comments. Rows shorter than the
//! widest row are padded with dead cells.

use std::path::Path;

use crate::io::configuration::{PLAINTEXT_ALIVE, PLAINTEXT_COMMENT, PLAINTEXT_DEAD};
use crate::io::error::{LifeError, Result, invalid_parameter, malformed_grid};
use crate::io::image::{export_grid_as_png, load_grid_from_png};
use crate::spatial::grid::Grid;

/// Supported on-disk pattern formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFormat {
    /// `.cells` / `.txt` plaintext
    Plaintext,
    /// `.png` image, one pixel block per cell
    Png,
}

impl PatternFormat {
    /// Pick the format from a file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a missing or unsupported extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("cells" | "txt") => Ok(Self::Plaintext),
            Some("png") => Ok(Self::Png),
            _ => Err(invalid_parameter(
                "path",
                &path.display(),
                &"expected a .cells, .txt or .png file",
            )),
        }
    }
}

/// Parse a plaintext pattern into a grid
///
/// # Errors
///
/// Returns `PatternParse` with the 1-based line number for characters other
/// than `O` and `.`, and `MalformedGrid` if the pattern holds no cells
pub fn parse_plaintext(text: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        if raw_line.starts_with(PLAINTEXT_COMMENT) {
            continue;
        }

        let mut row = Vec::with_capacity(raw_line.len());
        for ch in raw_line.trim_end().chars() {
            match ch {
                PLAINTEXT_ALIVE => row.push(true),
                PLAINTEXT_DEAD => row.push(false),
                other => {
                    return Err(LifeError::PatternParse {
                        line: index + 1,
                        reason: format!("unexpected character '{other}'"),
                    });
                }
            }
        }
        rows.push(row);
    }

    // Trailing blank lines carry no cells
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return Err(malformed_grid(&"pattern contains no cells"));
    }

    for row in &mut rows {
        row.resize(width, false);
    }

    Grid::from_rows(&rows)
}

/// Render a grid as plaintext, with an optional `!Name:` header
pub fn format_plaintext(grid: &Grid, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{PLAINTEXT_COMMENT}Name: {name}\n{grid}"),
        None => grid.to_string(),
    }
}

/// Read a plaintext pattern file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise any error
/// from [`parse_plaintext`]
pub fn load_plaintext(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|e| LifeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read pattern",
        source: e,
    })?;
    parse_plaintext(&text)
}

/// Write a grid as a plaintext pattern file, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the directory or file cannot be written
pub fn save_plaintext(grid: &Grid, path: &Path) -> Result<()> {
    create_parent_dir(path)?;
    let name = path.file_stem().map(|stem| stem.to_string_lossy());
    std::fs::write(path, format_plaintext(grid, name.as_deref())).map_err(|e| {
        LifeError::FileSystem {
            path: path.to_path_buf(),
            operation: "write pattern",
            source: e,
        }
    })
}

/// Load a grid from a `.cells`, `.txt` or `.png` file
///
/// # Errors
///
/// Returns an error if the extension is unsupported or the file cannot be
/// read or parsed
pub fn load_grid(path: &Path) -> Result<Grid> {
    match PatternFormat::from_path(path)? {
        PatternFormat::Plaintext => load_plaintext(path),
        PatternFormat::Png => load_grid_from_png(path),
    }
}

/// Save a grid in the format selected by the file extension
///
/// `scale` is the pixel edge length per cell and only applies to PNG output.
///
/// # Errors
///
/// Returns an error if the extension is unsupported or writing fails
pub fn save_grid(grid: &Grid, path: &Path, scale: u32) -> Result<()> {
    match PatternFormat::from_path(path)? {
        PatternFormat::Plaintext => save_plaintext(grid, path),
        PatternFormat::Png => export_grid_as_png(grid, scale, path),
    }
}

pub(crate) fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LifeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

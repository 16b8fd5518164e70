//! PNG output for synthesized canvases.
//!
//! Files are encoded into a temporary file in the output directory and then
//! renamed into place, so a reader never sees a half-written image.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tempfile::NamedTempFile;

use crate::error::{MoodError, Result};

use super::Canvas;

/// Longest mood fragment kept in a filename.
const MAX_SLUG_LEN: usize = 32;

/// Per-process counter that separates files written in the same nanosecond.
static FILE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Reduce a mood label to characters that are safe in a filename.
pub fn mood_slug(mood: &str) -> String {
    let slug: String = mood
        .trim()
        .chars()
        .take(MAX_SLUG_LEN)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug
    }
}

/// Build a fresh output filename: `mood_<slug>_<nanos>_<seq>.png`.
pub fn output_filename(mood: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = FILE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("mood_{}_{}_{}.png", mood_slug(mood), nanos, seq)
}

/// Write a canvas to a new PNG file in `dir`, returning its path.
///
/// Creates `dir` if needed. Never overwrites an existing file.
pub fn write_png(canvas: &Canvas, dir: &Path, mood: &str) -> Result<PathBuf> {
    if canvas.is_empty() {
        return Err(MoodError::Encode {
            message: "cannot encode a zero-area canvas as PNG".to_string(),
            help: Some("Request a size of at least 1".to_string()),
        });
    }

    fs::create_dir_all(dir).map_err(|e| MoodError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let path = dir.join(output_filename(mood));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MoodError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create temporary file: {}", e),
    })?;

    encode_png(canvas, tmp.as_file_mut()).map_err(|e| match e {
        MoodError::IoError(io) => MoodError::Io {
            path: tmp.path().to_path_buf(),
            message: format!("Failed to write PNG: {}", io),
        },
        other => other,
    })?;

    tmp.persist_noclobber(&path).map_err(|e| MoodError::Io {
        path: path.clone(),
        message: format!("Failed to write PNG: {}", e.error),
    })?;

    Ok(path)
}

/// Encode a canvas as RGBA8 PNG into any writer.
pub fn encode_png<W: Write>(canvas: &Canvas, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    let encoder = PngEncoder::new(&mut writer);
    encoder
        .write_image(
            &canvas.to_rgba_buffer(),
            canvas.width() as u32,
            canvas.height() as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| MoodError::Encode {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;
    writer.flush()?;
    Ok(())
}

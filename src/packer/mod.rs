mod error;


pub use error::PackError;

use anyhow::{Context, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::{FramingMode, PackConfig};
use crate::discover::discover;
use crate::emit::{render, write_output};

/// All four tables of the packed artifact, built in memory before emission.
pub struct PackedImage {
    /// Sorted relative paths, one per record.
    pub paths: Vec<String>,
    /// Every record's content plus terminator, concatenated in path order.
    pub raw_data: Vec<u8>,
    /// Starting byte position of each record within `raw_data`.
    pub offsets: Vec<usize>,
    /// zlib encoding of `raw_data` at best compression.
    pub compressed: Vec<u8>,
}

/// Read every file in `paths`, append the framing terminator, and record
/// per-record offsets into the concatenated buffer.
///
/// Contents are treated as opaque bytes; nothing is decoded or translated.
/// Any unreadable file aborts the run so a silently-incomplete artifact can
/// never be produced.
pub fn frame(root: &Path, paths: &[String], mode: FramingMode) -> Result<(Vec<u8>, Vec<usize>)> {
    let mut raw_data = Vec::new();
    let mut offsets = Vec::with_capacity(paths.len());

    for relative in paths {
        offsets.push(raw_data.len());
        let full = root.join(relative);
        let contents =
            fs::read(&full).context(format!("Failed to read file: {}", full.display()))?;
        raw_data.extend_from_slice(&contents);
        raw_data.extend_from_slice(mode.terminator());
    }

    Ok((raw_data, offsets))
}

/// zlib-compress the whole raw buffer at best level.
///
/// Build-time inputs are bounded in size, so this works on one buffer with
/// no streaming. Deterministic for identical input and level.
pub fn compress(raw_data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(raw_data)
        .context("Failed to compress raw data")?;
    encoder.finish().context("Failed to finalize compressed data")
}

/// Frame and compress an already-discovered path list into a `PackedImage`.
pub fn pack(root: &Path, paths: Vec<String>, mode: FramingMode) -> Result<PackedImage> {
    let (raw_data, offsets) = frame(root, &paths, mode)?;
    let compressed = compress(&raw_data)?;
    Ok(PackedImage {
        paths,
        raw_data,
        offsets,
        compressed,
    })
}

/// Run the full pipeline: discover, frame, compress, render, write.
///
/// All reads and the full render complete before the single output write,
/// so a run that aborts leaves any previous output file untouched.
pub fn run(config: &PackConfig) -> Result<PackedImage> {
    eprintln!(
        "[pack] Scanning {} for *.{} files...",
        config.root.display(),
        config.extension
    );
    let paths = discover(&config.root, &config.extension, &config.excluded_dirs)?;
    eprintln!("[pack] Found {} files", paths.len());

    let image = pack(&config.root, paths, config.framing)?;
    eprintln!(
        "[pack] Raw data: {} bytes, compressed: {} bytes",
        image.raw_data.len(),
        image.compressed.len()
    );

    let text = render(&image, &config.symbol_prefix);
    write_output(&config.output, &text)?;
    eprintln!("[pack] ✓ Wrote {}", config.output.display());

    Ok(image)
}

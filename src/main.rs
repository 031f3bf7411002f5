use anyhow::Result;
use clap::Parser;
use embedpack::{generate_cacert_module, generate_shared_module, packer, FramingMode, PackConfig};
use std::path::PathBuf;

/// Build-time asset packer.
///
/// Walks a source tree, concatenates eligible files with delimiter bytes,
/// compresses the concatenation, and writes a C source file of byte arrays
/// for embedding into a host binary.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Source root to pack
    #[arg(long, default_value = "Lib")]
    root: PathBuf,

    /// Generated C source file
    #[arg(long, default_value = "Modules/embeddedimport_data.c")]
    output: PathBuf,

    /// File extension to include, without the dot
    #[arg(long, default_value = "py")]
    extension: String,

    /// Directory name excluded at any depth (repeatable)
    #[arg(long = "exclude", default_values_t = [String::from("test"), String::from("__pycache__")])]
    excluded: Vec<String>,

    /// Record terminator appended after each file
    #[arg(long, value_enum, default_value = "nul")]
    framing: FramingMode,

    /// Prefix for the emitted C symbols
    #[arg(long, default_value = "embeddedimporter")]
    symbol_prefix: String,

    /// Certificate bundle to embed as a Python module before packing
    #[arg(long, requires = "cacert_out")]
    cacert_in: Option<PathBuf>,

    /// Destination module for the certificate bundle
    #[arg(long, requires = "cacert_in")]
    cacert_out: Option<PathBuf>,

    /// Directory of binary assets to embed as base64 before packing
    #[arg(long, requires = "shared_out")]
    shared_dir: Option<PathBuf>,

    /// Destination module for the shared assets
    #[arg(long, requires = "shared_dir")]
    shared_out: Option<PathBuf>,

    /// Asset filename to leave out of the shared module
    #[arg(long, default_value = "ubuntu.ttf")]
    shared_skip: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Auxiliary pre-steps write their own files before the packer runs.
    if let (Some(bundle), Some(out)) = (&args.cacert_in, &args.cacert_out) {
        generate_cacert_module(bundle, out)?;
    }
    if let (Some(dir), Some(out)) = (&args.shared_dir, &args.shared_out) {
        generate_shared_module(dir, out, &args.shared_skip)?;
    }

    let config = PackConfig {
        root: args.root,
        output: args.output,
        extension: args.extension,
        excluded_dirs: args.excluded,
        framing: args.framing,
        symbol_prefix: args.symbol_prefix,
    };

    packer::run(&config)?;
    Ok(())
}

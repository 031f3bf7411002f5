use clap::ValueEnum;
use std::path::PathBuf;

/// Record terminator appended after each file's content in the raw buffer.
///
/// The two modes are incompatible at the byte level; the downstream unpacker
/// must know which one the artifact was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FramingMode {
    /// A single NUL byte after each file.
    Nul,
    /// A newline byte, then a NUL byte, after each file.
    NewlineNul,
}

impl FramingMode {
    /// The terminator bytes this mode appends.
    pub fn terminator(self) -> &'static [u8] {
        match self {
            FramingMode::Nul => b"\0",
            FramingMode::NewlineNul => b"\n\0",
        }
    }
}

/// Run-wide packer configuration.
///
/// The defaults pack `Lib/**/*.py` (minus `test` and `__pycache__`
/// directories) into `Modules/embeddedimport_data.c` with NUL framing.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Source root to walk.
    pub root: PathBuf,
    /// Generated C source file.
    pub output: PathBuf,
    /// File extension to include, without the dot.
    pub extension: String,
    /// Directory names excluded at any depth.
    pub excluded_dirs: Vec<String>,
    /// Terminator appended after each file's content.
    pub framing: FramingMode,
    /// Prefix for the emitted C symbols.
    pub symbol_prefix: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Lib"),
            output: PathBuf::from("Modules/embeddedimport_data.c"),
            extension: "py".to_string(),
            excluded_dirs: vec!["test".to_string(), "__pycache__".to_string()],
            framing: FramingMode::Nul,
            symbol_prefix: "embeddedimporter".to_string(),
        }
    }
}

// Public API exports
pub mod config;
pub mod discover;
pub mod emit;
pub mod generators;
pub mod packer;

// Re-export main types for convenience
pub use config::{FramingMode, PackConfig};

pub use discover::discover;

pub use packer::{compress, frame, pack, PackError, PackedImage};

pub use emit::{render, write_output};

pub use generators::{generate_cacert_module, generate_shared_module};

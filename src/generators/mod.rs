//! One-off embedding generators that run before the packer step, each
//! reading whole files and writing an independent generated module.

mod cacert;
mod shared;

pub use cacert::generate_cacert_module;
pub use shared::generate_shared_module;

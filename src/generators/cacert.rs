use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Embed a certificate bundle as a Python module holding one raw-string
/// literal.
pub fn generate_cacert_module(bundle: &Path, output: &Path) -> Result<()> {
    eprintln!("[cacert] Embedding certificate bundle: {}", bundle.display());

    let data = fs::read_to_string(bundle).context(format!(
        "Failed to read certificate bundle: {}",
        bundle.display()
    ))?;

    let mut out = String::new();
    out.push_str("# This file was generated automatically.\n");
    out.push_str("_ca_cert_data = r\"\"\"");
    out.push_str(&data);
    out.push_str("\"\"\"\n");

    fs::write(output, out).context(format!("Failed to write {}", output.display()))
}

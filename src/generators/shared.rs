use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Characters per line in the emitted base64 literals.
const WRAP_WIDTH: usize = 60;

fn wrap(encoded: &str, width: usize) -> String {
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / width + 1);
    for (i, ch) in encoded.chars().enumerate() {
        if i > 0 && i % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    wrapped
}

/// Embed a directory of binary assets as a Python module mapping each
/// filename to a base64 string literal.
///
/// Eligible assets are the regular files with an extension directly under
/// `dir` (non-recursive), sorted by name; the one named `skip` is left out.
pub fn generate_shared_module(dir: &Path, output: &Path, skip: &str) -> Result<()> {
    eprintln!("[shared] Embedding shared assets from: {}", dir.display());

    let mut names = Vec::new();
    for entry in
        fs::read_dir(dir).context(format!("Failed to read asset directory: {}", dir.display()))?
    {
        let entry = entry.context("Failed to read asset directory entry")?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none() {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| anyhow::anyhow!("Asset name is not valid UTF-8: {:?}", name))?;
        if name == skip {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut out = String::new();
    out.push_str("# This file was generated automatically.\n");
    out.push_str("shared_files = {\n");
    for name in &names {
        let full = dir.join(name);
        let bytes =
            fs::read(&full).context(format!("Failed to read asset: {}", full.display()))?;
        let encoded = STANDARD.encode(&bytes);
        out.push_str("    \"");
        out.push_str(name);
        out.push_str("\": \"\"\"");
        out.push_str(&wrap(&encoded, WRAP_WIDTH));
        out.push_str("\n\"\"\",\n");
    }
    out.push_str("}\n");

    fs::write(output, out).context(format!("Failed to write {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_shared_module_sorts_and_skips() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.css"), b"hello").unwrap();
        fs::write(dir.path().join("app.js"), b"hi").unwrap();
        fs::write(dir.path().join("ubuntu.ttf"), b"font bytes").unwrap();
        fs::write(dir.path().join("README"), b"no extension").unwrap();
        let output = dir.path().join("_shared.py");

        generate_shared_module(dir.path(), &output, "ubuntu.ttf").unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "# This file was generated automatically.\n\
             shared_files = {\n\
             \x20   \"app.js\": \"\"\"aGk=\n\
             \"\"\",\n\
             \x20   \"style.css\": \"\"\"aGVsbG8=\n\
             \"\"\",\n\
             }\n"
        );
    }

    #[test]
    fn test_shared_module_wraps_long_literals() {
        let dir = TempDir::new().unwrap();
        // 90 input bytes encode to 120 base64 characters, two full lines.
        fs::write(dir.path().join("blob.bin"), vec![0u8; 90]).unwrap();
        let output = dir.path().join("_shared.py");

        generate_shared_module(dir.path(), &output, "ubuntu.ttf").unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let literal_lines: Vec<&str> = text
            .lines()
            .filter(|line| line.chars().all(|c| c == 'A') && !line.is_empty())
            .collect();
        assert_eq!(literal_lines.len(), 1);
        // First line carries the opening quote prefix, second is bare.
        assert!(text.contains(&format!("\"blob.bin\": \"\"\"{}\n", "A".repeat(60))));
        assert_eq!(literal_lines[0].len(), 60);
    }

    #[test]
    fn test_shared_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = generate_shared_module(
            &dir.path().join("absent"),
            &dir.path().join("_shared.py"),
            "ubuntu.ttf",
        );
        assert!(result.is_err());
    }
}

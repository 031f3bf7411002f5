use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::packer::PackedImage;

/// Hex literals per row inside a byte-array declaration.
const BYTES_PER_LINE: usize = 16;

fn push_hex_lines(out: &mut String, bytes: &[u8]) {
    for chunk in bytes.chunks(BYTES_PER_LINE) {
        let cells: Vec<String> = chunk.iter().map(|byte| format!("0x{:02x}", byte)).collect();
        out.push_str("  ");
        out.push_str(&cells.join(","));
        out.push_str(",\n");
    }
}

/// Render the packed image as C source text with five declarations:
/// the filename table, the raw size, the compressed payload, the compressed
/// size, and the offset table.
///
/// The filename table holds each path's ASCII bytes followed by a NUL, with
/// one extra NUL closing the whole table. Comment lines carry the original
/// paths for human readability only; consumers split on the NULs.
pub fn render(image: &PackedImage, symbol_prefix: &str) -> String {
    let mut out = String::new();
    out.push_str("#include <stddef.h>\n\n");

    out.push_str(&format!("char {}_filename[] = {{\n", symbol_prefix));
    for path in &image.paths {
        out.push_str(&format!("  // {}\n", path));
        push_hex_lines(&mut out, path.as_bytes());
        out.push_str("  0x00,\n");
    }
    out.push_str("  0x00\n");
    out.push_str("};\n\n");

    out.push_str(&format!(
        "const size_t {}_raw_data_size = {};\n\n",
        symbol_prefix,
        image.raw_data.len()
    ));

    out.push_str(&format!(
        "const unsigned char {}_raw_data_compressed[] = {{\n",
        symbol_prefix
    ));
    push_hex_lines(&mut out, &image.compressed);
    out.push_str("};\n\n");

    out.push_str(&format!(
        "const size_t {}_raw_data_compressed_size = {};\n\n",
        symbol_prefix,
        image.compressed.len()
    ));

    out.push_str(&format!("const size_t {}_data_offset[] = {{\n", symbol_prefix));
    for (path, offset) in image.paths.iter().zip(&image.offsets) {
        out.push_str(&format!("  {},  // {}\n", offset, path));
    }
    out.push_str("};\n");

    out
}

/// Write the rendered text in a single call.
///
/// Every input read and the full render happen before this point, so an
/// aborted run never leaves a partially-overwritten destination.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).context(format!("Failed to write output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::PackedImage;

    fn image(paths: &[&str], raw_data: &[u8], offsets: &[usize], compressed: &[u8]) -> PackedImage {
        PackedImage {
            paths: paths.iter().map(|p| p.to_string()).collect(),
            raw_data: raw_data.to_vec(),
            offsets: offsets.to_vec(),
            compressed: compressed.to_vec(),
        }
    }

    #[test]
    fn test_render_single_record() {
        let image = image(&["a.txt"], b"hi\0", &[0], &[0x78, 0xda]);
        let expected = "\
#include <stddef.h>

char embeddedimporter_filename[] = {
  // a.txt
  0x61,0x2e,0x74,0x78,0x74,
  0x00,
  0x00
};

const size_t embeddedimporter_raw_data_size = 3;

const unsigned char embeddedimporter_raw_data_compressed[] = {
  0x78,0xda,
};

const size_t embeddedimporter_raw_data_compressed_size = 2;

const size_t embeddedimporter_data_offset[] = {
  0,  // a.txt
};
";
        assert_eq!(render(&image, "embeddedimporter"), expected);
    }

    #[test]
    fn test_render_empty_image() {
        let image = image(&[], b"", &[], &[0x78, 0xda, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01]);
        let text = render(&image, "embeddedimporter");

        // Filename table is the single trailing NUL; the offset table has no
        // entries but the declaration is still present.
        assert!(text.contains("char embeddedimporter_filename[] = {\n  0x00\n};\n"));
        assert!(text.contains("const size_t embeddedimporter_raw_data_size = 0;\n"));
        assert!(text.contains("const size_t embeddedimporter_data_offset[] = {\n};\n"));
    }

    #[test]
    fn test_hex_lines_wrap_at_sixteen_bytes() {
        let mut out = String::new();
        push_hex_lines(&mut out, &[0xab; 17]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches("0xab").count(), 16);
        assert_eq!(lines[1], "  0xab,");
    }

    #[test]
    fn test_hex_bytes_are_lowercase_zero_padded() {
        let mut out = String::new();
        push_hex_lines(&mut out, &[0x00, 0x0f, 0xff]);
        assert_eq!(out, "  0x00,0x0f,0xff,\n");
    }

    #[test]
    fn test_offset_lines_are_annotated() {
        let image = image(
            &["a.txt", "sub/b.txt"],
            b"hi\0bye\0",
            &[0, 3],
            &[0x78, 0xda],
        );
        let text = render(&image, "embeddedimporter");
        assert!(text.contains("  0,  // a.txt\n"));
        assert!(text.contains("  3,  // sub/b.txt\n"));
    }

    #[test]
    fn test_symbol_prefix_is_configurable() {
        let image = image(&[], b"", &[], &[0x78]);
        let text = render(&image, "tclfs");
        assert!(text.contains("char tclfs_filename[]"));
        assert!(text.contains("const size_t tclfs_raw_data_size"));
        assert!(text.contains("const unsigned char tclfs_raw_data_compressed[]"));
        assert!(text.contains("const size_t tclfs_data_offset[]"));
    }
}

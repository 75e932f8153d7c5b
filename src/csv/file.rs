//! Reading raw lines from disk and writing exported lines back

use std::path::Path;

use crate::util::{is_likely_binary, validate_file_for_opening, FileError};

/// Split text on `\n`, `\r\n` or a lone `\r`
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Read every line of a text file
pub fn read_lines(path: &Path) -> Result<Vec<String>, FileError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileError::BinaryFile);
    }

    let content = std::fs::read_to_string(path).map_err(FileError::from_io)?;
    let lines: Vec<String> = split_lines(&content)
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write already-terminated lines verbatim, replacing any existing file
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), FileError> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
    }
    std::fs::write(path, content).map_err(FileError::from_io)?;

    tracing::info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

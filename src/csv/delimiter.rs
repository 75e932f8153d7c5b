//! Delimiter defaults

/// Delimiter used when nothing else is configured
pub const DEFAULT_DELIMITER: &str = ",";

/// Pick a delimiter from a file extension
///
/// `tsv` maps to a tab and `psv` to a pipe; everything else is a comma.
pub fn delimiter_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "tsv" => "\t",
        "psv" => "|",
        _ => DEFAULT_DELIMITER,
    }
}

/// Render a delimiter readably for messages (`\t` instead of a raw tab)
pub fn display_delimiter(delimiter: &str) -> String {
    delimiter.replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(delimiter_for_extension("csv"), ",");
        assert_eq!(delimiter_for_extension("CSV"), ",");
        assert_eq!(delimiter_for_extension("tsv"), "\t");
        assert_eq!(delimiter_for_extension("psv"), "|");
        assert_eq!(delimiter_for_extension("txt"), ",");
    }

    #[test]
    fn test_display_delimiter() {
        assert_eq!(display_delimiter("\t"), "\\t");
        assert_eq!(display_delimiter(";"), ";");
    }
}

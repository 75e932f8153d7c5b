//! Access errors for lines and documents

/// What an out-of-range index was pointing into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    /// A field within a line
    Field,
    /// A body row within a document
    Row,
}

impl IndexTarget {
    fn as_str(self) -> &'static str {
        match self {
            IndexTarget::Field => "field",
            IndexTarget::Row => "row",
        }
    }
}

/// Error returned by positional and name-based accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Index outside `0..len`
    OutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },
    /// Column name did not resolve against the header
    NotFound { name: String },
}

impl CsvError {
    pub fn field_out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            target: IndexTarget::Field,
            index,
            len,
        }
    }

    pub fn row_out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            target: IndexTarget::Row,
            index,
            len,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// True for `OutOfRange`
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { target, index, len } => write!(
                f,
                "{} index {} is out of range (length {})",
                target.as_str(),
                index,
                len
            ),
            Self::NotFound { name } => write!(f, "column \"{}\" not found in header", name),
        }
    }
}

impl std::error::Error for CsvError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = CsvError::row_out_of_range(5, 2);
        assert_eq!(err.to_string(), "row index 5 is out of range (length 2)");

        let err = CsvError::field_out_of_range(3, 3);
        assert_eq!(err.to_string(), "field index 3 is out of range (length 3)");
    }

    #[test]
    fn test_display_not_found() {
        let err = CsvError::not_found("Missing");
        assert_eq!(err.to_string(), "column \"Missing\" not found in header");
        assert!(err.is_not_found());
        assert!(!err.is_out_of_range());
    }
}

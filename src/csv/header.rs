//! Header detection strategies
//!
//! A document decides which raw line is its header through a [`HeaderPolicy`]:
//!
//! ```text
//! HeaderPolicy
//! ├── Disabled        every line is body
//! ├── FirstLine       line 0 is the header
//! └── Detect(..)      first line the detector accepts is the header,
//!                     lines before it are comments
//! ```

use std::fmt;

/// Decides whether a raw line is the header row
pub trait DetectHeader {
    fn is_header(&self, raw_line: &str) -> bool;
}

impl<F> DetectHeader for F
where
    F: Fn(&str) -> bool,
{
    fn is_header(&self, raw_line: &str) -> bool {
        self(raw_line)
    }
}

/// Matches raw lines starting with a fixed prefix (e.g. `#H`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixDetector {
    prefix: String,
}

impl PrefixDetector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl DetectHeader for PrefixDetector {
    fn is_header(&self, raw_line: &str) -> bool {
        raw_line.starts_with(&self.prefix)
    }
}

/// How a document finds its header row
#[derive(Default)]
pub enum HeaderPolicy {
    /// No header tracking
    Disabled,
    /// The first line is the header, unconditionally
    #[default]
    FirstLine,
    /// The first line accepted by the detector is the header
    Detect(Box<dyn DetectHeader>),
}

impl HeaderPolicy {
    /// Detect the header with any strategy (closure or [`PrefixDetector`])
    pub fn detect(detector: impl DetectHeader + 'static) -> Self {
        Self::Detect(Box::new(detector))
    }

    /// Detect the header as the first line starting with `prefix`
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::detect(PrefixDetector::new(prefix))
    }

    /// Build a policy from the `has_header` flag and an optional detector
    pub fn from_parts(has_header: bool, detector: Option<Box<dyn DetectHeader>>) -> Self {
        match (has_header, detector) {
            (false, _) => Self::Disabled,
            (true, None) => Self::FirstLine,
            (true, Some(detector)) => Self::Detect(detector),
        }
    }

    pub fn has_header(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Index of the header line among `raw_lines`, if any
    pub fn find_header<S: AsRef<str>>(&self, raw_lines: &[S]) -> Option<usize> {
        match self {
            Self::Disabled => None,
            Self::FirstLine => (!raw_lines.is_empty()).then_some(0),
            Self::Detect(detector) => raw_lines
                .iter()
                .position(|line| detector.is_header(line.as_ref())),
        }
    }
}

impl fmt::Debug for HeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::FirstLine => f.write_str("FirstLine"),
            Self::Detect(_) => f.write_str("Detect(..)"),
        }
    }
}

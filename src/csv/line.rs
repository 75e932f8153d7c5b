//! A single tokenized row
//!
//! Tokenizing is deliberately naive: the raw text is split on the literal
//! delimiter, each piece is trimmed, and one pair of surrounding quotes is
//! stripped. There is no escaping and no quoted delimiters.

use super::delimiter::DEFAULT_DELIMITER;
use super::error::CsvError;

const QUOTE: char = '"';

/// One row of delimiter-separated fields plus the delimiter that joins them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    fields: Vec<String>,
    delimiter: String,
}

impl Default for Line {
    fn default() -> Self {
        Self::empty(DEFAULT_DELIMITER)
    }
}

impl Line {
    /// Tokenize `raw` on the literal `delimiter`
    ///
    /// An empty `raw` produces zero fields. An empty `delimiter` never splits,
    /// so the whole trimmed line becomes a single field.
    pub fn parse(raw: &str, delimiter: &str) -> Self {
        let fields = if raw.is_empty() {
            Vec::new()
        } else if delimiter.is_empty() {
            vec![strip_quotes(raw.trim()).to_string()]
        } else {
            raw.split(delimiter)
                .map(|piece| strip_quotes(piece.trim()).to_string())
                .collect()
        };

        Self {
            fields,
            delimiter: delimiter.to_string(),
        }
    }

    /// Tokenize with the default `,` delimiter
    pub fn with_default_delimiter(raw: &str) -> Self {
        Self::parse(raw, DEFAULT_DELIMITER)
    }

    /// A line with no fields
    pub fn empty(delimiter: &str) -> Self {
        Self {
            fields: Vec::new(),
            delimiter: delimiter.to_string(),
        }
    }

    /// Build a line from already-split fields (no trimming or quote handling)
    pub fn from_fields<I, S>(fields: I, delimiter: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            delimiter: delimiter.to_string(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Mutable view of the fields; the count cannot change through it
    pub fn fields_mut(&mut self) -> &mut [String] {
        &mut self.fields
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`
    pub fn get(&self, index: usize) -> Result<&str, CsvError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CsvError::field_out_of_range(index, self.fields.len()))
    }

    /// Replace the field at `index`
    ///
    /// Writing past the end is rejected; use [`Line::push`] to grow a line.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), CsvError> {
        let len = self.fields.len();
        let slot = self
            .fields
            .get_mut(index)
            .ok_or_else(|| CsvError::field_out_of_range(index, len))?;
        *slot = value.into();
        Ok(())
    }

    /// Append a field
    pub fn push(&mut self, value: impl Into<String>) {
        self.fields.push(value.into());
    }

    /// First field equal to `name`, optionally ignoring case
    pub fn index_of(&self, name: &str, ignore_case: bool) -> Option<usize> {
        if ignore_case {
            self.index_of_case_insensitive(name)
        } else {
            self.index_of_exact(name)
        }
    }

    pub fn index_of_case_insensitive(&self, name: &str) -> Option<usize> {
        let target = name.to_lowercase();
        self.fields
            .iter()
            .position(|field| field.to_lowercase() == target)
    }

    pub fn index_of_exact(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field == name)
    }

    /// Resolve a column name (case-insensitive) to its index
    pub fn column(&self, name: &str) -> Result<usize, CsvError> {
        self.index_of_case_insensitive(name)
            .ok_or_else(|| CsvError::not_found(name))
    }

    pub fn contains(&self, name: &str, ignore_case: bool) -> bool {
        self.index_of(name, ignore_case).is_some()
    }

    /// True if every name resolves
    pub fn contains_all<S: AsRef<str>>(&self, names: &[S], ignore_case: bool) -> bool {
        names
            .iter()
            .all(|name| self.contains(name.as_ref(), ignore_case))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fields.is_empty() {
            return Ok(());
        }
        f.write_str(&self.fields.join(&self.delimiter))
    }
}

/// Drop everything outside the first and last quote, if there are two of them
fn strip_quotes(field: &str) -> &str {
    match (field.find(QUOTE), field.rfind(QUOTE)) {
        (Some(first), Some(last)) if first != last => &field[first + 1..last],
        _ => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let line = Line::parse("a,b,c", ",");
        assert_eq!(line.fields(), &["a", "b", "c"]);
        assert_eq!(line.delimiter(), ",");
    }

    #[test]
    fn test_parse_empty_has_no_fields() {
        let line = Line::parse("", ",");
        assert!(line.is_empty());
        assert_eq!(line.len(), 0);
        assert_eq!(line.to_string(), "");
    }

    #[test]
    fn test_parse_whitespace_only_is_one_field() {
        let line = Line::parse("   ", ",");
        assert_eq!(line.fields(), &[""]);
    }

    #[test]
    fn test_no_delimiter_is_single_trimmed_field() {
        let line = Line::parse("  plain value \t", ",");
        assert_eq!(line.fields(), &["plain value"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let line = Line::parse(" a , b ,c ", ",");
        assert_eq!(line.fields(), &["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_delimiter_keeps_empty_field() {
        let line = Line::parse("a,b,", ",");
        assert_eq!(line.fields(), &["a", "b", ""]);
    }

    #[test]
    fn test_multi_char_delimiter() {
        let line = Line::parse("a::b::c", "::");
        assert_eq!(line.fields(), &["a", "b", "c"]);
        assert_eq!(line.to_string(), "a::b::c");
    }

    #[test]
    fn test_empty_delimiter_does_not_split() {
        let line = Line::parse("a,b", "");
        assert_eq!(line.fields(), &["a,b"]);
    }

    #[test]
    fn test_quotes_stripped() {
        let line = Line::parse("\"hello, world\"", "|");
        assert_eq!(line.fields(), &["hello, world"]);
    }

    #[test]
    fn test_quotes_stripped_after_trim() {
        let line = Line::parse("  \"x\"  ,\"y\"", ",");
        assert_eq!(line.fields(), &["x", "y"]);
    }

    #[test]
    fn test_text_outside_quotes_is_dropped() {
        let line = Line::parse("pre\"mid\"post", ",");
        assert_eq!(line.fields(), &["mid"]);
    }

    #[test]
    fn test_inner_quotes_kept_between_outermost() {
        let line = Line::parse("\"say \"hi\" now\"", ",");
        assert_eq!(line.fields(), &["say \"hi\" now"]);
    }

    #[test]
    fn test_single_quote_left_alone() {
        let line = Line::parse("say \"hi", ",");
        assert_eq!(line.fields(), &["say \"hi"]);
    }

    #[test]
    fn test_quoted_delimiter_is_still_split() {
        let line = Line::parse("\"hello, world\"", ",");
        assert_eq!(line.fields(), &["\"hello", "world\""]);
    }

    #[test]
    fn test_empty_quotes_become_empty_field() {
        let line = Line::parse("\"\",a", ",");
        assert_eq!(line.fields(), &["", "a"]);
    }

    #[test]
    fn test_get_out_of_range() {
        let line = Line::parse("a,b", ",");
        assert_eq!(line.get(1), Ok("b"));
        assert_eq!(line.get(2), Err(CsvError::field_out_of_range(2, 2)));
    }

    #[test]
    fn test_set_in_range_and_out_of_range() {
        let mut line = Line::parse("a,b", ",");
        line.set(0, "z").unwrap();
        assert_eq!(line.get(0), Ok("z"));

        let err = line.set(2, "nope").unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn test_push_grows_line() {
        let mut line = Line::empty(";");
        line.push("a");
        line.push("b");
        assert_eq!(line.to_string(), "a;b");
    }

    #[test]
    fn test_fields_mut_edits_in_place() {
        let mut line = Line::parse("a,b", ",");
        for field in line.fields_mut() {
            field.make_ascii_uppercase();
        }
        assert_eq!(line.to_string(), "A,B");
    }

    #[test]
    fn test_index_of_case_handling() {
        let line = Line::parse("Name,Age,Name", ",");
        assert_eq!(line.index_of("name", true), Some(0));
        assert_eq!(line.index_of("name", false), None);
        assert_eq!(line.index_of("Age", false), Some(1));
        assert_eq!(line.index_of("AGE", true), Some(1));
        assert_eq!(line.index_of_exact("Name"), Some(0));
        assert_eq!(line.index_of_case_insensitive("missing"), None);
    }

    #[test]
    fn test_column_lookup() {
        let line = Line::parse("Name,Age", ",");
        assert_eq!(line.column("age"), Ok(1));
        assert_eq!(line.column("Height"), Err(CsvError::not_found("Height")));
    }

    #[test]
    fn test_contains() {
        let line = Line::parse("Name,Age,City", ",");
        assert!(line.contains("city", true));
        assert!(!line.contains("city", false));
        assert!(line.contains_all(&["Name", "age"], true));
        assert!(!line.contains_all(&["Name", "age"], false));
        assert!(!line.contains_all(&["Name", "Zip"], true));
        assert!(line.contains_all::<&str>(&[], true));
    }

    #[test]
    fn test_display_uses_stored_delimiter() {
        let line = Line::parse("a\t b\t\"c\"", "\t");
        assert_eq!(line.to_string(), "a\tb\tc");
    }

    #[test]
    fn test_default_line() {
        let line = Line::default();
        assert!(line.is_empty());
        assert_eq!(line.delimiter(), ",");
        assert_eq!(Line::with_default_delimiter("x,y").len(), 2);
    }
}

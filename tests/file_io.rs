//! Loading and saving documents on disk

mod common;

use std::fs;
use std::io::Write;

use common::{fields, rows};
use csvdoc::csv::LINE_ENDING;
use csvdoc::util::FileError;
use csvdoc::{Document, DocumentOptions, HeaderPolicy};
use tempfile::NamedTempFile;

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_open_remembers_path() {
    let file = temp_csv("Name,Age\nAlice,30\n");
    let doc = Document::open(file.path(), DocumentOptions::default()).unwrap();

    assert_eq!(doc.path(), Some(file.path()));
    assert_eq!(fields(doc.header()), vec!["Name", "Age"]);
    assert_eq!(rows(&doc), vec![vec!["Alice", "30"]]);
}

#[test]
fn test_save_writes_back_to_opened_file() {
    let file = temp_csv("# exported\nid;name\n1; one \n");
    let options = DocumentOptions::new(";", HeaderPolicy::prefix("id"));
    let mut doc = Document::open(file.path(), options).unwrap();

    doc.set_by_name(0, "name", "uno").unwrap();
    doc.save().unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        content,
        format!("# exported{0}id;name{0}1;uno{0}", LINE_ENDING)
    );
}

#[test]
fn test_save_as_switches_target() {
    let file = temp_csv("a,b\n");
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("copy.csv");

    let mut doc = Document::open(file.path(), DocumentOptions::headerless()).unwrap();
    doc.save_as(&copy).unwrap();
    assert_eq!(doc.path(), Some(copy.as_path()));

    doc.set(0, 0, "z").unwrap();
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&copy).unwrap(), format!("z,b{}", LINE_ENDING));
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "a,b\n");
}

#[test]
fn test_reopen_after_save_is_stable() {
    let file = temp_csv("#c\n#H,x,y\n1,2\n\n3,4\n");
    let options = || DocumentOptions::new(",", HeaderPolicy::prefix("#H"));

    let doc = Document::open(file.path(), options()).unwrap();
    doc.save().unwrap();
    let reopened = Document::open(file.path(), options()).unwrap();

    assert_eq!(reopened.export_lines(), doc.export_lines());
    assert_eq!(reopened.row_count(), 3);
}

#[test]
fn test_failed_load_keeps_previous_contents() {
    let file = temp_csv("a\nb\n");
    let mut doc = Document::open(file.path(), DocumentOptions::headerless()).unwrap();

    let result = doc.load_file("/nonexistent/missing.csv");
    assert_eq!(result, Err(FileError::NotFound));
    assert_eq!(doc.row_count(), 2);
    assert_eq!(doc.path(), Some(file.path()));
}

#[test]
fn test_open_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Document::open(dir.path(), DocumentOptions::default());
    assert!(matches!(result, Err(FileError::IsDirectory)));
}

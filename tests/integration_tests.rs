use anyhow::Result;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

use rollcall::{Confirmation, FieldName, RecordStore, Shell, StoreError, StudentRecord};

/// Helper to build a record without repeating every field
fn student(id: &str, first: &str, last: &str, grade: &str, class: &str) -> StudentRecord {
    StudentRecord::new(
        id.to_string(),
        first.to_string(),
        last.to_string(),
        grade.to_string(),
        class.to_string(),
        format!("{}.{}@example.edu", first.to_lowercase(), last.to_lowercase()),
    )
}

/// Helper to create a store backed by a fresh temp roster file
fn temp_store() -> Result<(TempDir, RecordStore, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let data_file = temp_dir.path().join("students.csv");
    let store = RecordStore::open(&data_file);
    Ok((temp_dir, store, data_file))
}

#[test]
fn test_end_to_end_crud_flow() -> Result<()> {
    let (_temp_dir, store, data_file) = temp_store()?;

    // Empty storage comes back as an empty collection, file gets a header
    assert!(store.snapshot()?.is_empty());
    assert!(data_file.exists());

    store.create(student("1", "Ada", "Lovelace", "91", "Mathematics"))?;
    store.create(student("2", "Grace", "Hopper", "95", "Computing"))?;

    store.sort_and_persist("ID")?;

    let found = store.search(FieldName::Id, "2")?;
    assert_eq!(found.last_name, "Hopper");

    store.request_delete("1")?;
    store.commit_delete("1", Confirmation::Confirmed)?;

    let remaining = store.snapshot()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");

    // The rewrite is durable: a fresh store over the same file agrees
    let reopened = RecordStore::open(&data_file);
    assert_eq!(reopened.snapshot()?.len(), 1);

    Ok(())
}

#[test]
fn test_sorted_order_is_the_at_rest_order() -> Result<()> {
    let (_temp_dir, store, data_file) = temp_store()?;

    store.create(student("9", "Ida", "Young", "70", "History"))?;
    store.create(student("10", "Joan", "Clarke", "84", "Cryptography"))?;
    store.create(student("2", "Mary", "Somerville", "88", "Astronomy"))?;

    // Numeric-aware order on ID: 2, 9, 10
    store.sort_and_persist("ID")?;
    let content = fs::read_to_string(&data_file)?;
    let ids: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "9", "10"]);

    // Lexical order on Last Name
    store.sort_and_persist("Last Name")?;
    let content = fs::read_to_string(&data_file)?;
    let names: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap())
        .collect();
    assert_eq!(names, vec!["Clarke", "Somerville", "Young"]);

    Ok(())
}

#[test]
fn test_every_operation_reloads_from_disk() -> Result<()> {
    let (_temp_dir, store, data_file) = temp_store()?;

    store.create(student("1", "Ada", "Lovelace", "91", "Mathematics"))?;

    // A record written behind the store's back is visible to the next call
    let mut content = fs::read_to_string(&data_file)?;
    content.push_str("2,Grace,Hopper,95,Computing,grace.hopper@example.edu\n");
    fs::write(&data_file, content)?;

    assert_eq!(store.read("2")?.first_name, "Grace");
    assert!(matches!(
        store.create(student("2", "Another", "Grace", "0", "None")),
        Err(StoreError::DuplicateId(_))
    ));

    Ok(())
}

#[test]
fn test_duplicate_create_keeps_single_record() -> Result<()> {
    let (_temp_dir, store, data_file) = temp_store()?;

    store.create(student("100", "Ada", "Lovelace", "91", "Mathematics"))?;
    let result = store.create(student("100", "Grace", "Hopper", "95", "Computing"));
    assert!(matches!(result, Err(StoreError::DuplicateId(id)) if id == "100"));

    let content = fs::read_to_string(&data_file)?;
    let matching = content
        .lines()
        .skip(1)
        .filter(|line| line.starts_with("100,"))
        .count();
    assert_eq!(matching, 1);
    assert!(content.contains("Ada"));
    assert!(!content.contains("Grace"));

    Ok(())
}

#[test]
fn test_declined_delete_is_a_no_op() -> Result<()> {
    let (_temp_dir, store, data_file) = temp_store()?;

    store.create(student("1", "Ada", "Lovelace", "91", "Mathematics"))?;
    store.create(student("2", "Grace", "Hopper", "95", "Computing"))?;
    let before = fs::read_to_string(&data_file)?;

    let request = store.request_delete("1")?;
    assert_eq!(request.record.first_name, "Ada");

    let result = store.commit_delete("1", Confirmation::Declined);
    assert!(matches!(result, Err(StoreError::Cancelled)));
    assert_eq!(fs::read_to_string(&data_file)?, before);

    Ok(())
}

#[test]
fn test_scripted_shell_session() -> Result<()> {
    let (_temp_dir, store, _data_file) = temp_store()?;

    // Create two students, sort by ID, search for the second, delete the
    // first with confirmation, then exit.
    let script = "\
c\n1\nAda\nLovelace\n91\nMathematics\nada@example.edu\n\
c\n2\nGrace\nHopper\n95\nComputing\ngrace@example.edu\n\
t\nID\n\
s\nid\n2\n\
d\n1\ny\n\
e\n";

    let input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    Shell::new(&store, input, &mut output).run()?;
    let output = String::from_utf8(output)?;

    assert!(output.contains("Students sorted successfully."));
    assert!(output.contains("Last Name: Hopper"));
    assert!(output.contains("Student deleted successfully."));

    let remaining = store.snapshot()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");

    Ok(())
}

#[test]
fn test_shell_reports_errors_and_continues() -> Result<()> {
    let (_temp_dir, store, _data_file) = temp_store()?;
    store.create(student("1", "Ada", "Lovelace", "91", "Mathematics"))?;

    // Duplicate create, bad sort attribute, then a successful read: the
    // loop survives every error.
    let script = "\
c\n1\nGrace\nHopper\n95\nComputing\ngrace@example.edu\n\
t\nEmail\n\
r\n1\n\
e\n";

    let input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    Shell::new(&store, input, &mut output).run()?;
    let output = String::from_utf8(output)?;

    assert!(output.contains("Error: a student with ID '1' already exists"));
    assert!(output.contains("Error: 'Email' is not a sortable attribute"));
    assert!(output.contains("First Name: Ada"));

    Ok(())
}

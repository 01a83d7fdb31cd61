/// Integration tests for the setup script concatenator
///
/// These tests build fragment files in a scratch directory and check the
/// layout of the generated script.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use supabase_setup_tools::core::concatenator::{end_marker, render_header, start_marker};
use supabase_setup_tools::SetupConcatenator;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
}

fn write_fragments(dir: &Path, fragments: &[(&str, &str)]) -> Vec<String> {
    for (name, body) in fragments {
        fs::write(dir.join(name), body).expect("Failed to write fragment");
    }
    fragments.iter().map(|(name, _)| name.to_string()).collect()
}

#[test]
fn test_fragments_appear_once_in_list_order() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let fragments = [
        ("db_schema_users.sql", "CREATE TABLE users (id uuid);"),
        ("db_schema_orders.sql", "CREATE TABLE orders (id uuid);"),
        ("db_security.sql", "ALTER TABLE users ENABLE ROW LEVEL SECURITY;"),
    ];
    let files = write_fragments(temp_dir.path(), &fragments);
    let output = temp_dir.path().join("db_FULL_SETUP.sql");

    let report = SetupConcatenator::new(temp_dir.path(), files.clone(), &output)
        .generate_at(date())
        .expect("Failed to generate setup script");

    assert_eq!(report.included, files);
    assert!(report.missing.is_empty());
    assert_eq!(report.warning_count(), 0);

    let mut expected = render_header(date());
    for (name, body) in &fragments {
        expected.push_str(&start_marker(name));
        expected.push_str(body);
        expected.push_str(&end_marker(name));
    }
    let generated = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(generated, expected);

    for (_, body) in &fragments {
        assert_eq!(generated.matches(body).count(), 1);
    }
}

#[test]
fn test_reordering_the_list_reorders_the_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_fragments(temp_dir.path(), &[("a.sql", "-- A"), ("b.sql", "-- B")]);
    let output = temp_dir.path().join("out.sql");

    SetupConcatenator::new(
        temp_dir.path(),
        vec!["b.sql".to_string(), "a.sql".to_string()],
        &output,
    )
    .generate_at(date())
    .expect("Failed to generate setup script");

    let generated = fs::read_to_string(&output).expect("Failed to read output");
    let b = generated.find("-- B").unwrap();
    let a = generated.find("-- A").unwrap();
    assert!(b < a);
    assert!(generated.find(&start_marker("b.sql")).unwrap() < b);
    assert!(generated.find(&end_marker("b.sql")).unwrap() > b);
}

#[test]
fn test_missing_fragments_are_skipped_with_warnings() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_fragments(temp_dir.path(), &[("db_audit.sql", "CREATE TRIGGER audit;")]);
    let files = vec![
        "db_schema_users.sql".to_string(),
        "db_audit.sql".to_string(),
        "db_soft_delete.sql".to_string(),
    ];
    let output = temp_dir.path().join("db_FULL_SETUP.sql");

    let report = SetupConcatenator::new(temp_dir.path(), files, &output)
        .generate_at(date())
        .expect("Missing fragments must not abort the run");

    assert_eq!(report.included, vec!["db_audit.sql".to_string()]);
    assert_eq!(
        report.missing,
        vec![
            "db_schema_users.sql".to_string(),
            "db_soft_delete.sql".to_string()
        ]
    );
    assert_eq!(report.warning_count(), 2);

    let generated = fs::read_to_string(&output).expect("Failed to read output");
    assert!(!generated.contains("db_schema_users.sql"));
    assert!(generated.contains("CREATE TRIGGER audit;"));
}

#[test]
fn test_no_fragments_still_writes_header() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp_dir.path().join("db_FULL_SETUP.sql");
    fs::write(&output, "stale content").expect("Failed to seed output");

    let report = SetupConcatenator::new(temp_dir.path(), vec!["gone.sql".to_string()], &output)
        .generate_at(date())
        .expect("Failed to generate setup script");

    assert_eq!(report.warning_count(), 1);
    let generated = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(generated, render_header(date()));
}

#[test]
fn test_unwritable_output_aborts() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp_dir.path().join("no_such_dir").join("out.sql");

    let result = SetupConcatenator::new(temp_dir.path(), Vec::new(), &output).generate_at(date());

    assert!(result.is_err());
}

#[test]
fn test_unreadable_fragment_aborts() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("binary.sql"), [0xff, 0xfe, 0x00]).unwrap();
    let output = temp_dir.path().join("out.sql");

    let result = SetupConcatenator::new(temp_dir.path(), vec!["binary.sql".to_string()], &output)
        .generate_at(date());

    assert!(result.is_err());
}

//! End-to-end tests for the leveled logger against a real filesystem.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use mnemosyne_core::{Category, Level, LoggerConfig, MessageTemplate, Placeholder, DEFAULT_MESSAGE_FORMAT};
use mnemosyne_logger::LeveledLogger;
use mnemosyne_test::{category_lines, category_size, rotated_siblings, MockContext};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mnemosyne_logger=debug,mnemosyne_sink=debug")
        .with_test_writer()
        .try_init();
}

fn logger_in(dir: &std::path::Path, name: &str) -> LeveledLogger {
    LeveledLogger::initialize(
        LoggerConfig::new(name)
            .with_base_directory(dir)
            .with_minimum_level(Level::Debug),
    )
    .unwrap()
}

fn message_of(line: &str) -> String {
    let template = MessageTemplate::parse(DEFAULT_MESSAGE_FORMAT).unwrap();
    template.captures(line).expect("line matches template")[&Placeholder::Message].to_string()
}

#[test]
fn test_one_file_per_category_with_formatted_lines() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let log = logger_in(dir.path(), "test");

    log.info(json!({"123": "123"}));
    log.debug(123);
    log.warning(123);
    log.error(123);
    log.flush();

    for (category, expected) in [
        (Category::Info, r#"{"123":"123"}"#),
        (Category::Debug, "123"),
        (Category::Warn, "123"),
        (Category::Error, "123"),
    ] {
        let lines = category_lines(dir.path(), "test", category);
        assert_eq!(lines.len(), 1, "{category} file should have one line");
        assert_eq!(message_of(&lines[0]), expected, "{category} message body");
    }
}

#[test]
fn test_records_below_minimum_level_append_no_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let log = LeveledLogger::initialize(
        LoggerConfig::new("test")
            .with_base_directory(dir.path())
            .with_minimum_level(Level::Warn),
    )
    .unwrap();

    log.debug("suppressed");
    log.info("suppressed");
    log.warning("written");
    log.flush();

    assert_eq!(category_size(dir.path(), "test", Category::Debug), 0);
    assert_eq!(category_size(dir.path(), "test", Category::Info), 0);
    assert_eq!(category_lines(dir.path(), "test", Category::Warn).len(), 1);
}

#[test]
fn test_line_captures_caller_location() {
    let dir = tempfile::tempdir().unwrap();
    let log = logger_in(dir.path(), "test");

    log.info("locate me");

    let lines = category_lines(dir.path(), "test", Category::Info);
    let template = MessageTemplate::parse(DEFAULT_MESSAGE_FORMAT).unwrap();
    let fields = template.captures(&lines[0]).unwrap();
    assert!(
        fields[&Placeholder::File].ends_with("integration_test.rs"),
        "caller file was {}",
        fields[&Placeholder::File]
    );
}

#[test]
fn test_size_rotation_resets_active_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = LeveledLogger::initialize(
        LoggerConfig::new("test")
            .with_base_directory(dir.path())
            .with_minimum_level(Level::Debug)
            .with_max_file_size(256),
    )
    .unwrap();

    for i in 0..32 {
        log.info(format!("padding line number {i} with some width"));
    }
    log.flush();

    let active = Category::Info.log_path(dir.path(), "test");
    assert!(!rotated_siblings(&active).is_empty(), "expected a rotation");
    assert!(std::fs::metadata(&active).unwrap().len() < 256);
}

#[test]
fn test_customer_entry_is_enriched_and_redacted() {
    let dir = tempfile::tempdir().unwrap();
    let log = logger_in(dir.path(), "test");

    let ctx = MockContext::end_user()
        .with_arg("password", json!("foo"))
        .with_arg("note", json!("visible"));
    let mut fields = Map::new();
    fields.insert("action".to_string(), json!("login"));
    fields.insert("user_id".to_string(), json!("spoofed"));
    log.record(Some(&ctx), fields);
    log.flush();

    let lines = category_lines(dir.path(), "test", Category::Customer);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("foo"), "secret leaked: {}", lines[0]);

    let entry: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(entry["action"], json!("login"));
    // Enrichment wins over caller-supplied keys.
    assert_eq!(entry["user_id"], json!("user-1001"));
    assert_eq!(entry["args"]["password"], json!("xxxxxx"));
    assert_eq!(entry["args"]["note"], json!("visible"));
    assert_eq!(entry["session_id"], json!("sess-abc123"));
    assert_eq!(entry["status"], json!(200));
}

#[test]
fn test_customer_entry_without_context_is_written_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let log = logger_in(dir.path(), "test");

    let mut fields = Map::new();
    fields.insert("event".to_string(), json!("cleanup"));
    log.record(None, fields);
    log.flush();

    let lines = category_lines(dir.path(), "test", Category::Customer);
    let entry: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(entry, json!({"event": "cleanup"}));
}

#[test]
fn test_admin_entry_carries_account_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let log = logger_in(dir.path(), "test");

    let mut fields = Map::new();
    fields.insert("change".to_string(), json!("quota"));
    log.admin(Some(&MockContext::operator()), fields);
    log.flush();

    let lines = category_lines(dir.path(), "test", Category::Admin);
    let entry: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(entry["change"], json!("quota"));
    assert_eq!(entry["account"], json!("ops-admin"));
    assert_eq!(entry["company_id"], json!("company-7"));
    assert_eq!(entry["status"], json!(200));
    assert!(entry.get("user_name").is_none());
}

#[test]
fn test_dispatch_routes_by_kind() {
    let dir = tempfile::tempdir().unwrap();
    let log = logger_in(dir.path(), "test");

    log.dispatch(None, json!("to warn"), "warning");
    log.dispatch(None, json!({"k": "v"}), "record");
    log.dispatch(Some(&MockContext::operator()), json!({"k": "v"}), "admin");
    log.dispatch(None, json!("mystery"), "telemetry");
    log.flush();

    assert_eq!(category_lines(dir.path(), "test", Category::Warn).len(), 1);
    assert_eq!(category_lines(dir.path(), "test", Category::Customer).len(), 1);
    assert_eq!(category_lines(dir.path(), "test", Category::Admin).len(), 1);

    // Unrecognized kinds fall back to info.
    let info = category_lines(dir.path(), "test", Category::Info);
    assert_eq!(info.len(), 1);
    assert_eq!(message_of(&info[0]), "mystery");
}

#[test]
fn test_concurrent_callers_produce_well_formed_lines() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(logger_in(dir.path(), "test"));

    let mut handles = Vec::new();
    for thread in 0..2 {
        let log = Arc::clone(&log);
        handles.push(std::thread::spawn(move || {
            for i in 0..1000 {
                log.info(format!("thread-{thread} entry-{i}"));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    log.flush();

    let lines = category_lines(dir.path(), "test", Category::Info);
    assert_eq!(lines.len(), 2000);

    let template = MessageTemplate::parse(DEFAULT_MESSAGE_FORMAT).unwrap();
    for line in &lines {
        let fields = template.captures(line).expect("well-formed line");
        assert!(fields[&Placeholder::Message].starts_with("thread-"));
    }
}

#[test]
fn test_initialize_surfaces_path_creation_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("base");
    std::fs::write(&blocker, b"a file where the base directory should be").unwrap();

    let err = LeveledLogger::initialize(
        LoggerConfig::new("test").with_base_directory(&blocker),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        mnemosyne_core::InitError::PathCreation { .. }
    ));
}

#[test]
fn test_initialize_rejects_bad_message_format() {
    let dir = tempfile::tempdir().unwrap();
    let err = LeveledLogger::initialize(
        LoggerConfig::new("test")
            .with_base_directory(dir.path())
            .with_message_format("{timestamp} {pid}"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        mnemosyne_core::InitError::MessageFormat { .. }
    ));
}

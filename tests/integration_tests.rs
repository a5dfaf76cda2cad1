//! Integration tests for the asynchronous writer
//!
//! These tests verify:
//! - FIFO order preservation
//! - Shutdown drain (no loss, no duplication)
//! - Truncation of overlong payloads
//! - Append semantics across reopen
//! - Concurrent producers
//! - Idempotent close
//! - Level code encoding
//! - Write failure accounting

use async_file_logger::core::level::LogLevel;
use async_file_logger::core::record::MAX_TEXT_LEN;
use async_file_logger::core::writer::AsyncWriter;
use async_file_logger::core::WriterError;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_fifo_order_single_producer() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fifo_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    for i in 0..100 {
        writer.info(format!("Message {}", i));
    }
    writer.close();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("0 : Message {}", i));
    }
}

#[test]
fn test_shutdown_drains_all_records() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("drain_test.log");

    {
        let writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
        for i in 0..1000 {
            writer.info(format!("Message {}", i));
        }
        // Writer drops here; drop must drain every queued record
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1000, "No records may be lost or duplicated");
}

#[test]
fn test_truncation_of_overlong_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("truncation_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    writer.info("x".repeat(MAX_TEXT_LEN + 145));
    writer.info("short message afterwards");
    writer.close();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("0 : {}", "x".repeat(MAX_TEXT_LEN)));
    // Subsequent entries are not corrupted by the truncation
    assert_eq!(lines[1], "0 : short message afterwards");
}

#[test]
fn test_append_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append_test.log");

    {
        let writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
        for i in 0..5 {
            writer.info(format!("First run {}", i));
        }
    }
    {
        let writer = AsyncWriter::open(&log_file).expect("Failed to reopen writer");
        for i in 0..7 {
            writer.warn(format!("Second run {}", i));
        }
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 12, "Reopen must preserve prior content");
    assert_eq!(lines[0], "0 : First run 0");
    assert_eq!(lines[4], "0 : First run 4");
    assert_eq!(lines[5], "1 : Second run 0");
    assert_eq!(lines[11], "1 : Second run 6");
}

#[test]
fn test_concurrent_producers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent_test.log");

    let writer = Arc::new(AsyncWriter::open(&log_file).expect("Failed to open writer"));

    let mut handles = vec![];
    for thread_id in 0..5 {
        let writer = Arc::clone(&writer);
        let handle = std::thread::spawn(move || {
            for i in 0..200 {
                writer.info(format!("Thread {} - Message {}", thread_id, i));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    drop(writer); // last reference; drains and closes

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1000, "5 threads x 200 records each");

    // Every line is well-formed (no interleaved/partial writes)
    for line in &lines {
        assert!(
            line.starts_with("0 : Thread "),
            "Malformed line: {:?}",
            line
        );
    }

    // Per-producer FIFO: each thread's records appear in submission order
    for thread_id in 0..5 {
        let prefix = format!("0 : Thread {} - Message ", thread_id);
        let indices: Vec<usize> = lines
            .iter()
            .filter(|l| l.starts_with(&prefix))
            .map(|l| l[prefix.len()..].parse().expect("message index"))
            .collect();
        assert_eq!(indices.len(), 200);
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "Thread {} records out of order",
            thread_id
        );
    }
}

#[test]
fn test_idempotent_close() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("close_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    writer.info("single entry");
    writer.close();
    writer.close(); // must not deadlock, crash, or duplicate anything

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "0 : single entry\n");
}

#[test]
fn test_level_codes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("levels_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    writer.submit(LogLevel::Info, "info entry");
    writer.submit(LogLevel::Warn, "warn entry");
    writer.submit(LogLevel::Error, "error entry");
    writer.close();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "0 : info entry");
    assert_eq!(lines[1], "1 : warn entry");
    assert_eq!(lines[2], "2 : error entry");
}

#[test]
fn test_open_failure_reports_path() {
    let result = AsyncWriter::open("/nonexistent_dir_for_writer_tests/app.log");

    match result {
        Err(WriterError::Open { path, .. }) => {
            assert!(path.contains("nonexistent_dir_for_writer_tests"));
        }
        other => panic!("Expected open error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_submit_after_close_is_discarded() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("late_submit_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    writer.info("accepted");
    writer.close();

    writer.info("rejected");

    assert_eq!(writer.metrics().records_discarded(), 1);
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "0 : accepted\n");
}

#[test]
fn test_embedded_newlines_are_not_escaped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("newline_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    writer.info("first half\nsecond half");
    writer.close();

    // The payload is written verbatim, so one record spans two physical lines
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "0 : first half\nsecond half\n");
}

#[test]
fn test_metrics_after_close() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("metrics_test.log");

    let mut writer = AsyncWriter::open(&log_file).expect("Failed to open writer");
    for i in 0..25 {
        writer.info(format!("Message {}", i));
    }
    writer.close();

    let metrics = writer.metrics();
    assert_eq!(metrics.records_submitted(), 25);
    assert_eq!(metrics.records_written(), 25);
    assert_eq!(metrics.write_failures(), 0);
}

//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger, and the
//! global logger slot. Tests touching the global slot are serialized.

use super::*;
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Logger that records every entry it receives; shared with the test
/// through an Arc so assertions can run after dispatch.
#[derive(Clone)]
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LogSeverity
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Warn, LogSeverity::Warn);
    assert_ne!(LogSeverity::Info, LogSeverity::Error);
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Info;
    let sev2 = sev1; // Copy, not move
    assert_eq!(sev1, sev2);
}

// ============================================================================
// LogEntry
// ============================================================================

#[test]
fn test_log_entry_construction() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: String::from("followcam::CameraRig"),
        message: String::from("No entity tagged 'Player'"),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Warn);
    assert_eq!(entry.source, "followcam::CameraRig");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: String::from("followcam::CameraRig"),
        message: String::from("boom"),
        file: Some("camera_rig.rs"),
        line: Some(42),
    };
    let clone = entry.clone();

    assert_eq!(clone.severity, entry.severity);
    assert_eq!(clone.message, entry.message);
    assert_eq!(clone.file, entry.file);
    assert_eq!(clone.line, entry.line);
}

// ============================================================================
// DefaultLogger
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: String::from("followcam::test"),
        message: String::from("plain message"),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: String::from("followcam::test"),
        message: String::from("detailed message"),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}

// ============================================================================
// Global logger slot
// ============================================================================

#[test]
#[serial]
fn test_dispatch_routes_to_installed_logger() {
    let capture = CaptureLogger::new();
    set_logger(capture.clone());

    dispatch(
        LogSeverity::Warn,
        "followcam::CameraRig",
        String::from("warning body"),
    );

    let entries = capture.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Warn);
    assert_eq!(entries[0].message, "warning body");
    assert!(entries[0].file.is_none());

    reset_logger();
}

#[test]
#[serial]
fn test_dispatch_detailed_carries_file_and_line() {
    let capture = CaptureLogger::new();
    set_logger(capture.clone());

    dispatch_detailed(
        LogSeverity::Error,
        "followcam::CameraRig",
        String::from("error body"),
        "camera_rig.rs",
        7,
    );

    let entries = capture.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file, Some("camera_rig.rs"));
    assert_eq!(entries[0].line, Some(7));

    reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_global_slot() {
    let capture = CaptureLogger::new();
    set_logger(capture.clone());

    crate::rig_info!("followcam::test", "info {}", 1);
    crate::rig_warn!("followcam::test", "warn {}", 2);
    crate::rig_error!("followcam::test", "error {}", 3);

    let entries = capture.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert_eq!(entries[1].severity, LogSeverity::Warn);
    assert_eq!(entries[2].severity, LogSeverity::Error);
    // Only the error macro records file:line
    assert!(entries[1].file.is_none());
    assert!(entries[2].file.is_some());
    assert!(entries[2].line.is_some());

    reset_logger();
}

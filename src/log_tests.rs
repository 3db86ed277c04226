use super::*;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// Severity ordering
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

// ============================================================================
// Custom logger capture
// ============================================================================

/// Captures entries into a shared vector for assertions.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_custom_logger_receives_entries() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger { entries: entries.clone() });

    crate::engine_info!("rift3d::test", "hello {}", 42);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "rift3d::test");
        assert_eq!(captured[0].message, "hello 42");
        assert!(captured[0].file.is_none());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_error_macro_includes_location() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger { entries: entries.clone() });

    crate::engine_error!("rift3d::test", "boom");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].file.is_some());
        assert!(captured[0].line.is_some());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger { entries: entries.clone() });
    reset_logger();

    // Default logger writes to stdout, not the capture buffer
    crate::engine_debug!("rift3d::test", "not captured");
    assert!(entries.lock().unwrap().is_empty());
}

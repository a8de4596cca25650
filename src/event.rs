//! Log callback system.
//!
//! Hosts can install a process-wide callback to receive editor diagnostics.
//! Every message is also forwarded to the `tracing` facade.

use std::sync::{Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(target: "textcore", "{message}"),
        LogLevel::Info => tracing::info!(target: "textcore", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "textcore", "{message}"),
        LogLevel::Error => tracing::error!(target: "textcore", "{message}"),
    }
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_log_callback() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&warnings);
        set_log_callback(move |level, msg| {
            if level == LogLevel::Warn && msg == "snapped offset" {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Warn, "snapped offset");
        emit_log(LogLevel::Debug, "ignored");
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
        clear_log_callback();
    }
}

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Where JSON trace lines go: `$TERMPICK_TRACE_LOG` or the temp dir.
pub fn tracing_log_path() -> PathBuf {
    env::var("TERMPICK_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("termpick_trace.jsonl"))
}

/// Install the global JSON subscriber once. Stdout belongs to the menu, so
/// logs always go to a file.
pub fn init_tracing(logs: bool, no_logs: bool) {
    if !logs || no_logs {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        init_tracing(true, true);
        init_tracing(false, false);
        assert!(TRACING_INIT.get().is_none());
    }

    #[test]
    fn trace_path_ends_in_jsonl() {
        if env::var_os("TERMPICK_TRACE_LOG").is_none() {
            assert!(tracing_log_path().ends_with("termpick_trace.jsonl"));
        }
    }
}

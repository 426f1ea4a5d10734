//! Tests for compatibility bridges

#[cfg(all(feature = "test-support", feature = "tracing-compat"))]
mod tracing_tests {
    use huelog::compat::tracing_bridge::TracingBridge;
    use huelog::test_support::CaptureLogger;
    use huelog::*;
    use std::sync::Arc;
    use tracing_subscriber::prelude::*;

    fn capture_with(capture: &CaptureLogger, f: impl FnOnce()) {
        let logger: Arc<dyn Logger> = Arc::new(capture.clone());
        let subscriber = tracing_subscriber::registry().with(TracingBridge::new(logger));
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_tracing_bridge() {
        let capture = CaptureLogger::new();

        capture_with(&capture, || {
            tracing::error!("Error from tracing");
            tracing::warn!("Warning from tracing");
            tracing::info!("Info from tracing");
            tracing::debug!("Debug from tracing");
            tracing::trace!("Trace from tracing");
            tracing::info!(count = 42, ok = true, path = "/x", "Message with field");
        });

        let logs = capture.logs();
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Error from tracing"));
        assert!(logs.contains("Warning from tracing"));
        assert!(logs.contains("Info from tracing"));
        assert!(logs.contains("Debug from tracing"));
        assert!(logs.contains("DEBUG-4"));
        assert!(logs.contains("Message with field count=42 ok=true path=/x"));
    }

    #[test]
    fn test_tracing_respects_level() {
        let capture = CaptureLogger::new().with_level(Level::INFO);

        capture_with(&capture, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
        });

        assert!(!capture.contains("hidden"));
        assert!(capture.contains("shown"));
    }

    #[test]
    fn test_tracing_spans() {
        let capture = CaptureLogger::new();

        capture_with(&capture, || {
            let span = tracing::info_span!("my_span");
            let _enter = span.enter();
            tracing::info!("Inside span");
        });

        assert!(capture.contains("my_span: Inside span"));
    }
}

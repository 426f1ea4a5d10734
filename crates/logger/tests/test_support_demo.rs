//! Demonstrates the test support functionality

#[cfg(feature = "test-support")]
mod tests {
    use huelog::test_support::*;
    use huelog::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_capture_logger() {
        let capture = CaptureLogger::new();
        let logger: Arc<dyn Logger> = Arc::new(capture.clone());

        logger.info("This is captured").unwrap();
        logger.error("This is also captured").unwrap();

        assert!(capture.contains("This is captured"));
        assert!(capture.contains("ERROR"));
        assert_eq!(capture.lines().len(), 2);
    }

    #[test]
    fn test_level_filter() {
        let capture = CaptureLogger::new().with_level(Level::WARN);
        let logger: Arc<dyn Logger> = Arc::new(capture.clone());

        logger.info("too quiet").unwrap();
        logger
            .log_attrs(Level::WARN.offset(1), "loud enough", [Attr::new("a", 1)])
            .unwrap();

        assert_eq!(capture.lines().len(), 1);
        assert!(capture.contains("WARN+1"));
        assert!(capture.contains("loud enough a=1"));
    }

    #[test]
    fn test_scoped_children_share_output() {
        let capture = CaptureLogger::new();
        let root: Arc<dyn Logger> = Arc::new(capture.clone());
        let child = root
            .with_attrs(vec![Attr::new("svc", "api")])
            .with_group("req");

        child
            .log_attrs(
                Level::INFO,
                "handled",
                [Attr::duration("took", Duration::from_millis(1500))],
            )
            .unwrap();
        root.info("root line").unwrap();

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("handled svc=api req.took=1.5s"));
        assert!(lines[1].ends_with("root line"));
    }

    #[test]
    fn test_clear() {
        let capture = CaptureLogger::new();
        capture.info("x").unwrap();
        capture.clear();
        assert!(capture.logs().is_empty());
    }
}

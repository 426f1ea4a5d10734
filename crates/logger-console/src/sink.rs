//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use termcolor::{ColorSpec, WriteColor};

/// Cloneable in-memory sink
///
/// Clones share one buffer, so a test can hand a clone to a logger and inspect what it
/// wrote. Colorized by default; [`MemorySink::no_color`] reports no color support, which
/// makes the console logger drop escape sequences.
#[derive(Debug, Clone)]
pub struct MemorySink {
    bytes: Arc<Mutex<Vec<u8>>>,
    color: bool,
}

impl MemorySink {
    /// Empty sink that accepts colored output
    pub fn new() -> Self {
        Self {
            bytes: Arc::new(Mutex::new(Vec::new())),
            color: true,
        }
    }

    /// Empty sink that reports no color support
    pub fn no_color() -> Self {
        Self {
            color: false,
            ..Self::new()
        }
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Written bytes as text
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Written text split into lines
    pub fn lines(&self) -> Vec<String> {
        self.to_string_lossy().lines().map(str::to_string).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Lines arrive already escaped; color specs are never used.
impl WriteColor for MemorySink {
    fn supports_color(&self) -> bool {
        self.color
    }

    fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(sink.contents(), b"one\ntwo\n");
        assert_eq!(sink.lines(), ["one", "two"]);

        sink.clear();
        assert!(writer.to_string_lossy().is_empty());
    }

    #[test]
    fn color_support() {
        assert!(MemorySink::new().supports_color());
        assert!(!MemorySink::no_color().supports_color());
    }
}

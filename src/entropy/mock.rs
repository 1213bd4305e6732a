//! Scripted entropy source for tests.

use super::{EntropyError, EntropySource};

/// Mock source that replays a fixed byte script.
///
/// The script repeats forever unless a read limit is set, after which
/// every read fails with [`EntropyError::Exhausted`]. Reads are counted
/// so tests can observe how much entropy the generator consumed.
#[derive(Debug, Clone)]
pub struct MockSource {
    script: Vec<u8>,
    position: usize,
    reads: usize,
    limit: Option<usize>,
    open: bool,
}

impl MockSource {
    /// A source that replays `script`, wrapping around at the end.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
            reads: 0,
            limit: None,
            open: true,
        }
    }

    /// A source that returns `byte` on every read.
    pub fn repeating(byte: u8) -> Self {
        Self::new(vec![byte])
    }

    /// Fails every read after the first `limit`.
    pub fn with_read_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of successful reads so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl EntropySource for MockSource {
    fn read_one(&mut self) -> Result<u8, EntropyError> {
        if !self.open {
            return Err(EntropyError::Closed);
        }
        if self.script.is_empty() || self.limit.is_some_and(|limit| self.reads >= limit) {
            return Err(EntropyError::Exhausted);
        }

        let byte = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        self.reads += 1;
        Ok(byte)
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_cycles() {
        let mut source = MockSource::new(*b"abc");
        let read: Vec<u8> = (0..7).map(|_| source.read_one().unwrap()).collect();
        assert_eq!(read, b"abcabca");
        assert_eq!(source.reads(), 7);
    }

    #[test]
    fn test_read_limit() {
        let mut source = MockSource::repeating(1).with_read_limit(2);
        assert!(source.read_one().is_ok());
        assert!(source.read_one().is_ok());
        assert!(matches!(source.read_one(), Err(EntropyError::Exhausted)));
        assert_eq!(source.reads(), 2);
    }

    #[test]
    fn test_empty_script_exhausted() {
        let mut source = MockSource::new(Vec::new());
        assert!(matches!(source.read_one(), Err(EntropyError::Exhausted)));
    }

    #[test]
    fn test_closed_source_refuses_reads() {
        let mut source = MockSource::repeating(1);
        source.close();
        assert!(matches!(source.read_one(), Err(EntropyError::Closed)));
    }
}

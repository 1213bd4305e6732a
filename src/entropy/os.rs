//! Operating system entropy device.

use super::{EntropyError, EntropySource};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// The blocking high-entropy device.
pub const DEFAULT_DEVICE: &str = "/dev/random";

/// Bytes fetched from the device per underlying read.
const READ_AHEAD: usize = 64;

/// Entropy read from an OS random device.
///
/// The device handle is acquired on construction and released by
/// [`EntropySource::close`] or on drop, whichever happens first.
pub struct OsSource {
    path: PathBuf,
    reader: Option<BufReader<File>>,
}

impl OsSource {
    /// Opens [`DEFAULT_DEVICE`].
    pub fn open() -> Result<Self, EntropyError> {
        Self::open_path(DEFAULT_DEVICE)
    }

    /// Opens the device (or any readable file) at `path`.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, EntropyError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| EntropyError::Open {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Opened OS entropy device");

        Ok(Self {
            path,
            reader: Some(BufReader::with_capacity(READ_AHEAD, file)),
        })
    }

    /// Path of the underlying device.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntropySource for OsSource {
    fn read_one(&mut self) -> Result<u8, EntropyError> {
        let reader = self.reader.as_mut().ok_or(EntropyError::Closed)?;
        let mut byte = [0u8; 1];
        match reader.read_exact(&mut byte) {
            Ok(()) => Ok(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(EntropyError::Exhausted),
            Err(e) => Err(EntropyError::Read(e)),
        }
    }

    fn close(&mut self) {
        if self.reader.take().is_some() {
            tracing::debug!(path = %self.path.display(), "Closed OS entropy device");
        }
    }

    fn is_open(&self) -> bool {
        self.reader.is_some()
    }
}

impl fmt::Debug for OsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsSource")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_file_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content: Vec<u8> = (0..200u8).collect();
        file.write_all(&content).unwrap();

        let mut source = OsSource::open_path(file.path()).unwrap();
        let read: Vec<u8> = (0..200).map(|_| source.read_one().unwrap()).collect();
        assert_eq!(read, content);
    }

    #[test]
    fn test_eof_is_exhausted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"xy").unwrap();

        let mut source = OsSource::open_path(file.path()).unwrap();
        assert_eq!(source.read_one().unwrap(), b'x');
        assert_eq!(source.read_one().unwrap(), b'y');
        assert!(matches!(source.read_one(), Err(EntropyError::Exhausted)));
    }

    #[test]
    fn test_missing_device_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-device");

        match OsSource::open_path(&missing) {
            Err(EntropyError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn test_close_releases_handle() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut source = OsSource::open_path(file.path()).unwrap();
        assert!(source.is_open());

        source.close();
        assert!(!source.is_open());
        assert!(matches!(source.read_one(), Err(EntropyError::Closed)));

        // Second close is a no-op
        source.close();
        assert!(!source.is_open());
    }

    #[cfg(unix)]
    #[test]
    fn test_default_device_produces_bytes() {
        let mut source = OsSource::open().unwrap();
        assert_eq!(source.path(), Path::new(DEFAULT_DEVICE));
        for _ in 0..128 {
            source.read_one().unwrap();
        }
    }
}

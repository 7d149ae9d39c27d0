use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

/// Destination of a rendered tools file.
///
/// Writes are reported by the `Write` impl; `close` reports failures while
/// releasing the handle.
pub trait Sink: Write {
    /// Flush and release the sink.
    fn close(self) -> io::Result<()>;
}

/// A file on disk, created or truncated on open.
///
/// Writes go straight to the file so that failures such as a full disk are
/// reported by the write itself.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Create the file at `path`, truncating it if it exists.
    ///
    /// The parent directory is not created.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Sink for FileSink {
    fn close(mut self) -> io::Result<()> {
        self.file.flush()?;
        drop(self.file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_sink_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.go");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_all(b"package tmp\n").unwrap();
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package tmp\n");
    }

    #[test]
    fn test_file_sink_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.go");
        fs::write(&path, "a much longer previous content\n").unwrap();

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_all(b"short\n").unwrap();
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_sink_character_device_closes_cleanly() {
        let mut sink = FileSink::create(Path::new("/dev/null")).unwrap();
        sink.write_all(b"package tmp\n").unwrap();
        sink.close().unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_sink_full_device_fails_on_write() {
        let mut sink = FileSink::create(Path::new("/dev/full")).unwrap();

        let err = sink.write_all(b"package tmp\n").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }

    #[test]
    fn test_file_sink_missing_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("tools.go");

        let err = FileSink::create(&path).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!temp.path().join("missing").exists());
    }
}

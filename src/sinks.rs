use std::{
    fs::File,
    io::{LineWriter, Write},
    sync::{Arc, Mutex},
};

use eyre::Context;

use crate::Sink;

/// Append-mode file destination. Writes go through a [`LineWriter`] behind
/// a mutex, so a single `FileSink` is safe to share across threads.
pub struct FileSink {
    file: Mutex<LineWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<String>) -> eyre::Result<Self> {
        let path: &str = &path.into();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed opening or creating log file {}", path))?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
        })
    }
}

impl Sink for FileSink {
    fn write(&self, buf: &[u8]) -> eyre::Result<usize> {
        let mut file = self.file.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn close(&self) -> eyre::Result<()> {
        let mut file = self.file.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        file.flush().context("Can't flush log file")
    }
}

/// Writes to the process stderr stream, locking the handle per write.
pub struct StderrSink {
    handle: std::io::Stderr,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            handle: std::io::stderr(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StderrSink {
    fn write(&self, buf: &[u8]) -> eyre::Result<usize> {
        let mut writer = self.handle.lock();
        writer.write_all(buf)?;
        Ok(buf.len())
    }

    fn close(&self) -> eyre::Result<()> {
        self.handle.lock().flush().context("Can't flush stderr")
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink {}

impl NullSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl Sink for NullSink {
    fn write(&self, buf: &[u8]) -> eyre::Result<usize> {
        Ok(buf.len())
    }

    fn close(&self) -> eyre::Result<()> {
        Ok(())
    }
}

/// In-memory destination backed by a shared buffer.
///
/// Cloning yields another handle to the same buffer, so a test can keep
/// one handle for assertions while the logger owns the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, buf: &[u8]) -> eyre::Result<usize> {
        let mut inner = self.buf.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn close(&self) -> eyre::Result<()> {
        Ok(())
    }
}

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::error::DesktopError;

/// Log sink handed out per event: the configured log file, or nowhere.
/// Stderr is never used since it shares the screen with the desktop.
pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<File>),
    Sink(io::Sink),
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(file) => (&**file).write(buf),
            DelegatingInner::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(file) => (&**file).flush(),
            DelegatingInner::Sink(sink) => sink.flush(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn sink() -> Self {
        Self::default()
    }

    pub fn to_file(file: File) -> Self {
        Self {
            file: Some(Arc::new(file)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match &self.file {
            Some(file) => DelegatingInner::File(Arc::clone(file)),
            None => DelegatingInner::Sink(io::sink()),
        };
        DelegatingWriter { inner }
    }
}

/// Open (or create) `path` for appending log lines.
pub fn open_log_file(path: &Path) -> Result<File, DesktopError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| DesktopError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber. Returns `false` when one was already
/// installed, which leaves the existing one in place.
pub fn init(level: Level, log_file: Option<&Path>) -> Result<bool, DesktopError> {
    let writer = match log_file {
        Some(path) => SubscriberMakeWriter::to_file(open_log_file(path)?),
        None => SubscriberMakeWriter::sink(),
    };
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .is_ok();
    Ok(installed)
}

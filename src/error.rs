use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize direction `{0}` (expected one of n, s, e, w, ne, nw, se, sw)")]
pub struct ParseDirectionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell width must be between 1 and 64 pixels, got {0}")]
    CellWidth(i32),
    #[error("cell height must be between 1 and 64 pixels, got {0}")]
    CellHeight(i32),
    #[error("taskbar height must be between 0 and 200 pixels, got {0}")]
    TaskbarHeight(i32),
    #[error("poll interval must be between 1 and 1000 milliseconds, got {0}")]
    PollInterval(u64),
}

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

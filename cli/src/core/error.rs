use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PmresError {
    Io(io::Error),
    FileNotFound(String),
    InvalidJson {
        path: String,
        source: serde_json::Error,
    },
    Input(String),
    Generic(String),
}

impl fmt::Display for PmresError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PmresError::Io(err) => write!(f, "IO error: {err}"),
            PmresError::FileNotFound(path) => write!(
                f,
                "File not found: {}. Please check the path and try again.",
                crate::core::paths::clean_path_str(path)
            ),
            PmresError::InvalidJson { path, source } => write!(
                f,
                "Failed to decode JSON in {}: {source}",
                crate::core::paths::clean_path_str(path)
            ),
            PmresError::Input(msg) => write!(f, "Input error: {msg}"),
            PmresError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PmresError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PmresError::Io(err) => Some(err),
            PmresError::InvalidJson { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PmresError {
    fn from(err: io::Error) -> Self {
        PmresError::Io(err)
    }
}

impl From<String> for PmresError {
    fn from(msg: String) -> Self {
        PmresError::Generic(msg)
    }
}

impl From<&str> for PmresError {
    fn from(msg: &str) -> Self {
        PmresError::Generic(msg.to_string())
    }
}

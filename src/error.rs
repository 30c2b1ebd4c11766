//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// Raw file is missing, unreadable or holds no valid record.
    Parse {
        path: PathBuf,
        reason: String,
    },
    /// Same identifier defined twice with different values in one raw file.
    DuplicateIdentifier {
        path: PathBuf,
        id: String,
    },
    Configuration(String),
    UnknownDataset(String),
    Custom(String),
}

impl Error {
    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Parse { path, reason } => {
                write!(f, "could not parse {}: {reason}", path.display())
            }
            Error::DuplicateIdentifier { path, id } => write!(
                f,
                "identifier {id} is defined twice with different values in {}",
                path.display()
            ),
            Error::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Error::UnknownDataset(name) => write!(f, "unknown dataset: {name}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("The file at {} was not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not export {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalysisError::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn export(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        AnalysisError::Export {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

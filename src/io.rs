use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AnalysisError, Result};

/// Demo input written by `--write-sample`.
pub const SAMPLE_TEXT: &str = r#"
Artificial Intelligence (AI) is transforming the world!
But... what is AI? It is a broad field. Machine Learning (ML) is a subset of AI.

To start with ML, you need data. DATA is the new oil.
However, raw data is often "dirty". You must clean it...
Cleaning data takes 80% of the time.

Python is the king of Data Science. Why Python?
Because python is simple, and PYTHON has great libraries like Pandas and NumPy.
C# is great, but Python is better for ML.

Contact our support team at: support@ai-learning.org or hr@tech-corp.com.
Project start date: 2024-05-20.
Deadline: 15/01/2025.

Is it hard? No! Is it fun? YES!!!
"#;

///Reads a UTF-8 text file. An empty file is not an error.
pub fn read_input(path: &Path) -> Result<String> {
    debug!("reading input from {}", path.display());
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::InputNotFound(path.to_path_buf()),
        _ => AnalysisError::InputRead {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

///Writes `content` to `path`, creating parent directories and overwriting an existing file.
///Returns the absolute path of the written file.
pub fn save_report(content: &str, path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| AnalysisError::output(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| AnalysisError::output(path, e))?;

    Ok(absolute(path))
}

///Writes the bundled demo text to `path`.
pub fn write_sample(path: &Path) -> Result<PathBuf> {
    save_report(SAMPLE_TEXT, path)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| AnalysisError::output(dir, e))
        }
        _ => Ok(()),
    }
}

pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

//! Path validation for opening files and adding projects

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Why a path cannot be opened as a file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FileOpenError {
    #[error("file not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("is a directory")]
    IsDirectory,
    #[error("binary file")]
    BinaryFile,
    #[error("file too large ({size_mb:.1} MB)")]
    TooLarge { size_mb: f64 },
    #[error("{0}")]
    Io(String),
}

impl FileOpenError {
    /// Message for the status line
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::TooLarge { size_mb } => format!(
                "{} is too large ({:.1} MB, max {} MB)",
                filename,
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::Io(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

/// Why a path cannot be added as a project
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("project directory not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotDirectory(String),
    #[error("project {0} already exists")]
    Duplicate(String),
}

fn io_to_open_error(e: std::io::Error) -> FileOpenError {
    match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound,
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
        _ => FileOpenError::Io(e.to_string()),
    }
}

/// Check that `path` is an existing, readable, text file within the size limit
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(io_to_open_error)?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    File::open(path).map_err(io_to_open_error)?;

    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }

    Ok(())
}

/// Check that `path` is an existing directory
pub fn validate_project_dir(path: &Path) -> Result<(), ProjectError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ProjectError::NotDirectory(path.display().to_string())),
        Err(_) => Err(ProjectError::NotFound(path.display().to_string())),
    }
}

/// Check if a file is likely binary by scanning its first 8KB for null bytes
///
/// Returns `false` on any read error.
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// File name of `path` for messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

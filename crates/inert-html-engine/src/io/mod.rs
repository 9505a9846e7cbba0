use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// The extension of markdown sources.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Whether `path` names a markdown source by its extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, replacing any existing one
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Copy a file, creating the destination's parent directories
pub fn copy_file(from: &Path, to: &Path) -> Result<(), IoError> {
    if !from.exists() {
        return Err(IoError::NotFound(from.to_path_buf()));
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::copy(from, to).map_err(IoError::Io)?;
    Ok(())
}

/// Markdown files under `root`, relative to it and sorted.
///
/// Subdirectories are only entered when `recursive` is set.
pub fn scan_markdown_files(root: &Path, recursive: bool) -> Result<Vec<RelativePathBuf>, IoError> {
    scan_files(root, recursive, is_markdown)
}

/// Every non-markdown file under `root`, relative to it and sorted.
pub fn scan_asset_files(root: &Path, recursive: bool) -> Result<Vec<RelativePathBuf>, IoError> {
    scan_files(root, recursive, |path| !is_markdown(path))
}

fn scan_files(
    root: &Path,
    recursive: bool,
    keep: impl Fn(&Path) -> bool,
) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_source_dir(root)?;

    let mut files = Vec::new();
    scan_directory(root, recursive, &keep, &mut files)?;

    let mut relative = files
        .iter()
        .map(|path| to_relative(root, path))
        .collect::<Result<Vec<_>, _>>()?;
    relative.sort();
    Ok(relative)
}

fn to_relative(root: &Path, path: &Path) -> Result<RelativePathBuf, IoError> {
    let stripped = path.strip_prefix(root).map_err(|_| {
        IoError::InvalidSourceDir(format!("{} is outside {}", path.display(), root.display()))
    })?;
    RelativePathBuf::from_path(stripped)
        .map_err(|e| IoError::InvalidSourceDir(format!("{}: {e}", path.display())))
}

fn scan_directory(
    dir: &Path,
    recursive: bool,
    keep: &impl Fn(&Path) -> bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                scan_directory(&path, recursive, keep, files)?;
            }
        } else if keep(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Joins a source-relative path onto a root directory.
pub fn resolve(relative_path: &RelativePath, root: &Path) -> PathBuf {
    relative_path.to_path(root)
}

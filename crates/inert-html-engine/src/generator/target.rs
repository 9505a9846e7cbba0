use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::{IoError, is_markdown};

use super::GenerateError;

/// The only output file type.
pub const HTML_EXTENSION: &str = "html";

/// What a single run converts, and where the output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One markdown file to one HTML file.
    Page { src: PathBuf, dest: PathBuf },
    /// Every markdown file in a directory into an output directory.
    Directory { src: PathBuf, dest: PathBuf },
}

/// Works out the output location for `src`.
///
/// Without `output`, a directory is generated in place and a file is written
/// next to itself with an `.html` extension. An output path that does not
/// exist yet is taken to be a directory unless it ends in `.html`.
pub fn resolve_target(src: &Path, output: Option<&Path>) -> Result<Target, GenerateError> {
    let src_is_dir = stat(src)?.is_dir();
    if !src_is_dir && !is_markdown(src) {
        return Err(GenerateError::InvalidSource(src.to_path_buf()));
    }

    let Some(output) = output else {
        return Ok(if src_is_dir {
            Target::Directory {
                src: src.to_path_buf(),
                dest: src.to_path_buf(),
            }
        } else {
            Target::Page {
                src: src.to_path_buf(),
                dest: src.with_extension(HTML_EXTENSION),
            }
        });
    };

    let output_is_dir = match fs::metadata(output) {
        Ok(meta) => meta.is_dir(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            output.extension().is_none_or(|ext| ext != HTML_EXTENSION)
        }
        Err(e) => return Err(IoError::Io(e).into()),
    };

    match (src_is_dir, output_is_dir) {
        (true, true) => Ok(Target::Directory {
            src: src.to_path_buf(),
            dest: output.to_path_buf(),
        }),
        (true, false) => Err(GenerateError::DirectoryToFile {
            src: src.to_path_buf(),
            dest: output.to_path_buf(),
        }),
        (false, true) => {
            let file_name = Path::new(src.file_name().unwrap_or_default());
            Ok(Target::Page {
                src: src.to_path_buf(),
                dest: output.join(file_name.with_extension(HTML_EXTENSION)),
            })
        }
        (false, false) => Ok(Target::Page {
            src: src.to_path_buf(),
            dest: output.to_path_buf(),
        }),
    }
}

fn stat(path: &Path) -> Result<fs::Metadata, IoError> {
    fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Io(e),
    })
}

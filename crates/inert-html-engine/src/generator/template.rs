use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Markers a template must contain, each found at or after the previous one.
const REQUIRED_TAGS: [&str; 8] = [
    "<!DOCTYPE html>",
    "<html",
    ">",
    "<head>",
    "</head>",
    "<body>",
    "</body>",
    "</html>",
];

/// Page template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>

<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title> {{ Title }} </title>
</head>

<body>
{{ Content }}
</body>

</html>"#;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read template file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Template file is a directory: {0}")]
    IsDirectory(PathBuf),
    #[error("Invalid template: {0} placeholder not found")]
    MissingPlaceholder(&'static str),
    #[error("Invalid template: {0} tag not found")]
    MissingTag(&'static str),
}

/// A validated HTML page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Template {
    /// Reads and validates a template file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let read_error = |source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        };
        if fs::metadata(path).map_err(read_error)?.is_dir() {
            return Err(TemplateError::IsDirectory(path.to_path_buf()));
        }
        let source = fs::read_to_string(path).map_err(read_error)?;
        Self::parse(source)
    }

    /// Validates template text: both placeholders, then the page skeleton in order.
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();

        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !source.contains(placeholder) {
                return Err(TemplateError::MissingPlaceholder(placeholder));
            }
        }

        let mut rest = source.trim();
        for tag in REQUIRED_TAGS {
            let index = rest.find(tag).ok_or(TemplateError::MissingTag(tag))?;
            rest = &rest[index..];
        }

        Ok(Self { source })
    }

    /// Splices a page into the template, title first.
    pub fn populate(&self, title: &str, body: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, body)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

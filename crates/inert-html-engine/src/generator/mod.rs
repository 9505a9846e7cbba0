//! # Site Generation
//!
//! Wraps the converter with the filesystem: front matter removal, template
//! splicing, overwrite handling and directory walks.
//!
//! ## Modules
//!
//! - **`front_matter`**: `strip_front_matter()`
//! - **`template`**: `Template` validation and placeholder substitution
//! - **`target`**: `resolve_target()` maps a source and optional output path to a `Target`
//!
//! A [`Generator`] runs a [`Target`]. Errors abort the run at the first
//! failing file; parse diagnostics are only logged.

pub mod front_matter;
pub mod target;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::parsing::markdown_to_html;

pub use front_matter::strip_front_matter;
pub use target::{HTML_EXTENSION, Target, resolve_target};
pub use template::{DEFAULT_TEMPLATE, Template, TemplateError};

/// Source file that keeps its name when pages are written as directories.
pub const INDEX_SOURCE: &str = "index.md";
/// File name used for pages written as directories.
pub const INDEX_PAGE: &str = "index.html";

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("Invalid source {0}: directory or *.md file expected")]
    InvalidSource(PathBuf),
    #[error("Cannot write output from directory {src} to file {dest}")]
    DirectoryToFile { src: PathBuf, dest: PathBuf },
    #[error("Failed to read overwrite answer: {0}")]
    Prompt(#[source] std::io::Error),
}

/// What to do when an output file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    #[default]
    Overwrite,
    /// Quietly skip existing files.
    NoClobber,
    /// Ask an [`OverwritePrompt`] for each existing file.
    Prompt,
}

impl OverwritePolicy {
    /// `no_clobber` wins over `interactive`.
    pub fn from_flags(no_clobber: bool, interactive: bool) -> Self {
        if no_clobber {
            Self::NoClobber
        } else if interactive {
            Self::Prompt
        } else {
            Self::Overwrite
        }
    }
}

/// Asks whether an existing output file may be replaced.
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self, path: &Path) -> std::io::Result<bool>;
}

/// Declines every overwrite. For runs that never prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyOverwrite;

impl OverwritePrompt for DenyOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> std::io::Result<bool> {
        Ok(false)
    }
}

/// Whether a prompt answer allows the overwrite: `y` or `yes`.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "yes")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub overwrite: OverwritePolicy,
    /// Descend into subdirectories of a source directory.
    pub recursive: bool,
    /// Write `page.md` to `page/index.html`.
    pub pages_as_dirs: bool,
    /// Copy non-markdown files of a source directory to the output.
    pub copy_assets: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub written: usize,
    pub skipped: usize,
    pub copied: usize,
}

impl GenerateSummary {
    fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Written(_) => self.written += 1,
            PageOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

pub struct Generator<P: OverwritePrompt> {
    template: Template,
    options: GenerateOptions,
    prompt: P,
}

impl<P: OverwritePrompt> Generator<P> {
    pub fn new(template: Template, options: GenerateOptions, prompt: P) -> Self {
        Self {
            template,
            options,
            prompt,
        }
    }

    pub fn generate(&mut self, target: &Target) -> Result<GenerateSummary, GenerateError> {
        match target {
            Target::Page { src, dest } => {
                let mut summary = GenerateSummary::default();
                summary.record(&self.generate_page(src, dest)?);
                Ok(summary)
            }
            Target::Directory { src, dest } => self.generate_directory(src, dest),
        }
    }

    /// Converts one markdown file, subject to the overwrite policy.
    pub fn generate_page(&mut self, src: &Path, dest: &Path) -> Result<PageOutcome, GenerateError> {
        let dest = self.page_destination(src, dest);
        if !self.should_write(&dest)? {
            log::info!("Skipping existing file: {}", dest.display());
            return Ok(PageOutcome::Skipped(dest));
        }

        let text = io::read_file(src)?;
        let rendered = markdown_to_html(strip_front_matter(&text));
        for diagnostic in &rendered.diagnostics {
            log::warn!("{}: {diagnostic}", src.display());
        }

        let page = self.template.populate(&rendered.title, &rendered.body);
        io::write_file(&dest, &page)?;
        log::info!("MD -> HTML: {} -> {}", src.display(), dest.display());
        Ok(PageOutcome::Written(dest))
    }

    /// Converts every markdown file in `src`, mirroring its layout under `dest`.
    pub fn generate_directory(
        &mut self,
        src: &Path,
        dest: &Path,
    ) -> Result<GenerateSummary, GenerateError> {
        log::info!("Processing directory: {}", src.display());
        let mut summary = GenerateSummary::default();

        for relative in io::scan_markdown_files(src, self.options.recursive)? {
            let page_src = io::resolve(&relative, src);
            let page_dest = io::resolve(&relative.with_extension(HTML_EXTENSION), dest);
            summary.record(&self.generate_page(&page_src, &page_dest)?);
        }

        if self.options.copy_assets && !same_directory(src, dest) {
            summary.copied = self.copy_assets(src, dest)?;
        }

        Ok(summary)
    }

    fn copy_assets(&self, src: &Path, dest: &Path) -> Result<usize, GenerateError> {
        let mut copied = 0;
        for relative in io::scan_asset_files(src, self.options.recursive)? {
            let from = io::resolve(&relative, src);
            // Output nested inside the source is not an asset.
            if from.starts_with(dest) {
                continue;
            }
            let to = io::resolve(&relative, dest);
            io::copy_file(&from, &to)?;
            log::info!("{} -> {}", from.display(), to.display());
            copied += 1;
        }
        Ok(copied)
    }

    fn page_destination(&self, src: &Path, dest: &Path) -> PathBuf {
        let is_index = src
            .file_name()
            .is_some_and(|name| name == INDEX_SOURCE);
        if self.options.pages_as_dirs && !is_index {
            dest.with_extension("").join(INDEX_PAGE)
        } else {
            dest.to_path_buf()
        }
    }

    fn should_write(&mut self, dest: &Path) -> Result<bool, GenerateError> {
        if !dest.exists() {
            return Ok(true);
        }
        match self.options.overwrite {
            OverwritePolicy::Overwrite => Ok(true),
            OverwritePolicy::NoClobber => Ok(false),
            OverwritePolicy::Prompt => self
                .prompt
                .confirm_overwrite(dest)
                .map_err(GenerateError::Prompt),
        }
    }
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

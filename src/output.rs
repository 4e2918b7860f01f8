use crate::fs::FileSystem;
use crate::render::{escape_html, heading_block};
use std::io;
use std::path::Path;

/// Where the page goes when the caller doesn't say otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "Output/skill_tree.html";

/// Drop the first of two identical heading blocks.
///
/// Pages with a single copy (or none) come back unchanged.
pub fn strip_duplicate_heading(html: &str, heading: &str) -> String {
    let block = heading_block(&escape_html(heading));
    if html.matches(block.as_str()).count() > 1 {
        html.replacen(block.as_str(), "", 1)
    } else {
        html.to_string()
    }
}

/// Writes a rendered page, creating the parent directory first.
pub struct OutputWriter<'a> {
    fs: &'a dyn FileSystem,
    dedupe_heading: Option<String>,
}

impl<'a> OutputWriter<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            dedupe_heading: None,
        }
    }

    /// Strip the duplicated heading block for `heading` before writing.
    pub fn with_heading_dedupe(mut self, heading: impl Into<String>) -> Self {
        self.dedupe_heading = Some(heading.into());
        self
    }

    pub fn write(&self, path: &Path, html: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.fs.exists(parent) {
                self.fs.create_dir_all(parent)?;
            }
        }

        match &self.dedupe_heading {
            Some(heading) => self.fs.write(path, &strip_duplicate_heading(html, heading))?,
            None => self.fs.write(path, html)?,
        }

        tracing::info!(path = %path.display(), "wrote skill tree page");
        Ok(())
    }
}

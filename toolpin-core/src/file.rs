use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    Error, Result,
    sink::{FileSink, Sink},
    template::{TEMPLATE, Template},
};

/// Tool reference written in the header of generated files by default.
pub const DEFAULT_TOOL_REF: &str = "https://github.com/bwplotka/gobin";

/// A Go tools file pinning a set of packages.
///
/// Packages are deduplicated and sorted when rendered, so the same set of
/// packages always produces the same bytes regardless of input order.
#[derive(Debug, Clone)]
pub struct ToolsFile {
    path: PathBuf,
    packages: Vec<String>,
    tool_ref: String,
    template: &'static str,
}

impl ToolsFile {
    /// Create a tools file at `path` with no packages.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            packages: Vec::new(),
            tool_ref: DEFAULT_TOOL_REF.to_string(),
            template: TEMPLATE,
        }
    }

    /// Add packages to pin. Duplicates are allowed.
    pub fn packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages.extend(packages.into_iter().map(Into::into));
        self
    }

    /// Set the tool reference written in the header comment.
    ///
    /// Line breaks are replaced with spaces so the header stays one comment line.
    pub fn tool_ref(mut self, tool_ref: impl Into<String>) -> Self {
        self.tool_ref = tool_ref.into().replace(['\r', '\n'], " ");
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique packages in byte-wise ascending order.
    pub fn sorted_packages(&self) -> Vec<&str> {
        self.packages
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Render the file content
    pub fn render(&self) -> Result<String> {
        let template = Template::parse(self.template)?;
        Ok(template.render(&self.tool_ref, &self.sorted_packages()))
    }

    /// Write the file to disk, creating or truncating it.
    ///
    /// Nothing is created if the template cannot be rendered.
    pub fn write(&self) -> Result<()> {
        let document = self.render()?;
        let sink = FileSink::create(&self.path).map_err(|e| Error::create(&self.path, e))?;
        debug!(
            path = %self.path.display(),
            packages = self.sorted_packages().len(),
            "writing tools file"
        );
        self.write_document(sink, &document)
    }

    /// Render into an already opened sink, closing it afterwards.
    pub fn write_to<S: Sink>(&self, sink: S) -> Result<()> {
        let document = self.render()?;
        self.write_document(sink, &document)
    }

    fn write_document<S: Sink>(&self, mut sink: S, document: &str) -> Result<()> {
        let written = sink
            .write_all(document.as_bytes())
            .map_err(|e| Error::write(&self.path, e));

        match (written, sink.close()) {
            (Ok(()), Ok(())) => Ok(()),
            (Ok(()), Err(close)) => Err(Error::close(&self.path, close)),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close)) => Err(err.with_close_error(&self.path, close)),
        }
    }
}

/// Generate the tools file at `file_path` pinning `packages`.
///
/// The parent directory of `file_path` must exist.
pub fn generate<I, S>(file_path: impl AsRef<Path>, packages: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ToolsFile::new(file_path.as_ref())
        .packages(packages)
        .write()
}

/// Render the tools file content for `packages` without touching the disk.
pub fn render<I, S>(packages: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ToolsFile::new(PathBuf::new()).packages(packages).render()
}

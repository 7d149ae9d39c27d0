//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from tools file generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Tools file path.
    pub path: PathBuf,

    /// Pinned packages, deduplicated and sorted.
    pub packages: Vec<String>,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written,
    /// Dry-run preview with the rendered content.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written => self.render_written(out),
            GenerationResult::Preview(content) => self.render_preview(out, content),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output) {
        out.key_value("Generated", &self.path.display().to_string());
        out.newline();

        out.section(&format!("Packages ({})", self.packages.len()));
        for package in &self.packages {
            out.list_item(package);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, content: &str) {
        out.divider(&self.path.display().to_string());
        out.preformatted(content.trim_end());

        out.divider("Summary");
        out.preformatted(&format!(
            "{} packages would be pinned",
            self.packages.len()
        ));
    }
}

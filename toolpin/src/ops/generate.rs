//! Generate operation - tools file generation from a package list.

use std::path::PathBuf;

use toolpin_core::{Result, ToolsFile};
use tracing::{debug, info, warn};

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Tools file to write.
    pub output: PathBuf,
    /// Packages to pin, possibly with duplicates.
    pub packages: Vec<String>,
    /// Tool reference written in the header comment.
    pub tool_ref: String,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let file = ToolsFile::new(opts.output)
        .packages(opts.packages)
        .tool_ref(opts.tool_ref);

    let packages: Vec<String> = file
        .sorted_packages()
        .into_iter()
        .map(String::from)
        .collect();
    if packages.is_empty() {
        warn!("no packages given, the import block will be empty");
    }
    debug!(packages = ?packages, "resolved package set");

    let result = if opts.dry_run {
        GenerationResult::Preview(file.render()?)
    } else {
        file.write()?;
        info!(
            "pinned {} packages in {}",
            packages.len(),
            file.path().display()
        );
        GenerationResult::Written
    };

    Ok(GenerateReport {
        path: file.path().to_path_buf(),
        packages,
        result,
    })
}

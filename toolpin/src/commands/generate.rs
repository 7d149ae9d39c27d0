use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use toolpin_core::DEFAULT_TOOL_REF;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Tools file written when neither the command line nor the config names one.
const DEFAULT_OUTPUT: &str = "tools.go";

#[derive(Args)]
pub struct GenerateCommand {
    /// Packages to pin (e.g. golang.org/x/tools/cmd/goimports)
    pub packages: Vec<String>,

    /// Tools file to write (defaults to ./tools.go)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a toolpin.toml listing packages to pin
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tool reference written in the generated header
    #[arg(long)]
    pub tool_ref: Option<String>,

    /// Preview the generated file without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self
            .config
            .as_deref()
            .map(|path| Config::open(path).unwrap_or_exit());

        let opts = self.options(config.as_ref());
        let report = ops::generate(opts).unwrap_or_exit();
        report.render(&mut TerminalOutput);

        Ok(())
    }

    /// Merge command line arguments with the config file. Command line wins.
    fn options(&self, config: Option<&Config>) -> GenerateOptions {
        let config_dir = self
            .config
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new(""));

        let output = match (&self.output, config.and_then(|c| c.output.as_ref())) {
            (Some(output), _) => output.clone(),
            (None, Some(output)) => config_dir.join(output),
            (None, None) => PathBuf::from(DEFAULT_OUTPUT),
        };

        let tool_ref = self
            .tool_ref
            .clone()
            .or_else(|| config.and_then(|c| c.tool_ref.clone()))
            .unwrap_or_else(|| DEFAULT_TOOL_REF.to_string());

        let mut packages = config.map(|c| c.packages.clone()).unwrap_or_default();
        packages.extend(self.packages.iter().cloned());

        GenerateOptions {
            output,
            packages,
            tool_ref,
            dry_run: self.dry_run,
        }
    }
}

//! Generation of Go tools files.
//!
//! A tools file is a placeholder Go source behind the `tools` build tag that
//! blank-imports every tool a module depends on, so the module manifest keeps
//! them pinned.

mod error;
mod file;
mod sink;
mod template;

pub use error::{Error, Result};
pub use file::{DEFAULT_TOOL_REF, ToolsFile, generate, render};
pub use sink::{FileSink, Sink};
pub use template::{TEMPLATE, Template};

//! The tools file template.

use crate::{Error, Result};

const TOOL_REF: &str = "{{tool_ref}}";
const IMPORTS: &str = "{{imports}}";

/// Source of every generated tools file.
pub const TEMPLATE: &str = "// Temporary code generated by {{tool_ref}}. DO NOT EDIT.
// +build tools
package tmp

import (
{{imports}})
";

/// A parsed template: fixed text around the tool reference and import block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    head: &'a str,
    middle: &'a str,
    tail: &'a str,
}

impl<'a> Template<'a> {
    /// Parse a template containing `{{tool_ref}}` followed by `{{imports}}`,
    /// each exactly once.
    pub fn parse(source: &'a str) -> Result<Self> {
        let (head, rest) = split_placeholder(source, TOOL_REF)?;
        let (middle, tail) = split_placeholder(rest, IMPORTS)?;
        if head.contains(IMPORTS) {
            return Err(Error::template(format!(
                "`{IMPORTS}` must come after `{TOOL_REF}`"
            )));
        }

        Ok(Self { head, middle, tail })
    }

    /// Render the document. `packages` are emitted in the given order, one
    /// anonymous import per line.
    pub fn render(&self, tool_ref: &str, packages: &[&str]) -> String {
        let mut out = String::with_capacity(
            self.head.len() + self.middle.len() + self.tail.len() + tool_ref.len(),
        );
        out.push_str(self.head);
        out.push_str(tool_ref);
        out.push_str(self.middle);
        for package in packages {
            out.push_str("\t_ \"");
            out.push_str(package);
            out.push_str("\"\n");
        }
        out.push_str(self.tail);
        out
    }
}

fn split_placeholder<'a>(source: &'a str, placeholder: &str) -> Result<(&'a str, &'a str)> {
    let Some((before, after)) = source.split_once(placeholder) else {
        return Err(Error::template(format!("missing `{placeholder}`")));
    };
    if after.contains(placeholder) {
        return Err(Error::template(format!(
            "`{placeholder}` appears more than once"
        )));
    }
    Ok((before, after))
}

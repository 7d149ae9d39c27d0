use std::{
    io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for toolpin-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse template: {message}")]
    #[diagnostic(code(toolpin::template))]
    Template { message: String },

    #[error("failed to create '{path}'")]
    #[diagnostic(
        code(toolpin::create),
        help("the parent directory must exist and be writable")
    )]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(toolpin::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to close '{path}'")]
    #[diagnostic(code(toolpin::close))]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Closing failed after the operation had already failed.
    ///
    /// The earlier failure is kept as the source of this error.
    #[error("additionally failed to close '{path}': {close}")]
    #[diagnostic(code(toolpin::close))]
    CloseAfterFailure {
        path: PathBuf,
        close: io::Error,
        #[source]
        primary: Box<Error>,
    },
}

impl Error {
    pub(crate) fn template(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Template {
            message: message.into(),
        })
    }

    pub(crate) fn create(path: &Path, source: io::Error) -> Box<Self> {
        Box::new(Error::Create {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn close(path: &Path, source: io::Error) -> Box<Self> {
        Box::new(Error::Close {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Attach a close failure to an error that already happened.
    pub(crate) fn with_close_error(self: Box<Self>, path: &Path, close: io::Error) -> Box<Self> {
        Box::new(Error::CloseAfterFailure {
            path: path.to_path_buf(),
            close,
            primary: self,
        })
    }

    /// The failure that made the operation fail.
    ///
    /// For [`Error::CloseAfterFailure`] this is the earlier error, otherwise
    /// the error itself.
    pub fn primary(&self) -> &Error {
        match self {
            Error::CloseAfterFailure { primary, .. } => primary.primary(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_primary_of_plain_error_is_itself() {
        let err = Error::write(Path::new("tools.go"), io::Error::other("disk full"));
        assert!(matches!(err.primary(), Error::Write { .. }));
    }

    #[test]
    fn test_close_after_failure_keeps_original() {
        let err = Error::write(Path::new("tools.go"), io::Error::other("disk full"))
            .with_close_error(Path::new("tools.go"), io::Error::other("bad fd"));

        assert_eq!(
            err.to_string(),
            "additionally failed to close 'tools.go': bad fd"
        );
        assert!(matches!(err.primary(), Error::Write { .. }));

        let source = err.source().expect("original error is the source");
        assert_eq!(source.to_string(), "failed to write 'tools.go'");
    }

    #[test]
    fn test_create_error_message_names_path() {
        let err = Error::create(
            Path::new("missing/tools.go"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.to_string(), "failed to create 'missing/tools.go'");
    }
}

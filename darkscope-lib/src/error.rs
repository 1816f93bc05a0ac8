use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a scoping run.
///
/// The rewrite itself never fails; malformed CSS is passed through. Errors come from the
/// filesystem, a bad scope class, or the optional audit pass.
#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scope class is empty or contains characters that would break a selector.
    #[error("invalid scope class: {0:?}")]
    InvalidScopeClass(String),

    /// lightningcss could not parse the rewritten stylesheet.
    #[error("audit failed to parse stylesheet: {0}")]
    Audit(String),
}

impl ScopeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScopeError::Io {
            path: path.into(),
            source,
        }
    }
}

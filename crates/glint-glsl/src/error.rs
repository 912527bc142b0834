use std::fmt;
use std::io;
use std::path::PathBuf;

/// An error produced while resolving a shader's `#include` tree.
///
/// All variants are unrecoverable at the point of discovery: the resolver
/// returns no partial output, and a failed resolve is only meaningfully
/// retried after the underlying files change.
#[derive(Debug)]
pub enum ResolveError {
    /// A file could not be read (missing, unreadable, not valid UTF-8).
    Read { path: PathBuf, source: io::Error },

    /// A line contained the `#include` marker but no well-formed quoted path.
    MalformedDirective {
        path: PathBuf,
        /// 1-based line number within `path`.
        line: usize,
        /// The raw offending line, for diagnosis.
        content: String,
    },

    /// A file was included while it was still being expanded.
    Cycle { path: PathBuf },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "could not read '{}': {}", path.display(), source)
            }
            Self::MalformedDirective { path, line, content } => {
                write!(
                    f,
                    "malformed #include directive at {}:{}: {:?}",
                    path.display(),
                    line,
                    content
                )
            }
            Self::Cycle { path } => {
                write!(f, "circular #include of '{}'", path.display())
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

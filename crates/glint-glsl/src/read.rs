use std::collections::HashMap;
use std::io;
use std::path::Path;

/// File-read capability consumed by the resolver.
///
/// The resolver performs no existence checks of its own; it just attempts the
/// read and maps failure to [`ResolveError::Read`](crate::ResolveError::Read).
pub trait FileRead {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRead;

impl FileRead for FsRead {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Reads from an in-memory map of path → source text.
///
/// Useful for shader sources embedded with `include_str!` and for hermetic
/// tests; lookups use the path exactly as the resolver produces it.
#[derive(Debug, Default, Clone)]
pub struct MemoryRead {
    files: HashMap<String, String>,
}

impl MemoryRead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.files.insert(path.into(), source.into());
        self
    }
}

impl FileRead for MemoryRead {
    fn read(&self, path: &Path) -> io::Result<String> {
        let key = path.to_string_lossy();
        self.files
            .get(key.as_ref())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no entry for '{key}'")))
    }
}

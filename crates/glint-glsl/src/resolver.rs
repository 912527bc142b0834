use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::guard::guard_name;
use crate::read::{FileRead, FsRead};

/// Substring that marks a line as an include directive.
///
/// Detection is substring-based, not tokenization: a directive-like sequence
/// inside a comment or string literal on an otherwise unrelated line is
/// misinterpreted. Documented limitation.
const INCLUDE_MARKER: &str = "#include";

// ── Resolver ──────────────────────────────────────────────────────────────

/// Expands `#include "path"` directives in GLSL sources into one flattened
/// text blob per root request.
///
/// Include paths resolve relative to the directory of the *including* file.
/// Each included file is read and expanded at most once per [`resolve`] call,
/// its expansion wrapped in an `#ifndef`/`#define`/`#endif` guard derived
/// from the include path, with `#line` directives restoring original line
/// numbers so downstream compiler diagnostics stay meaningful.
///
/// The resolver holds no per-call state — the inclusion chain and expansion
/// cache are locals of each [`resolve`] call — so one instance may serve
/// concurrent calls from multiple threads.
///
/// [`resolve`]: IncludeResolver::resolve
pub struct IncludeResolver<R = FsRead> {
    reader: R,
}

impl IncludeResolver<FsRead> {
    /// Creates a resolver reading from the filesystem.
    pub fn new() -> Self {
        Self { reader: FsRead }
    }
}

impl Default for IncludeResolver<FsRead> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FileRead> IncludeResolver<R> {
    /// Creates a resolver over a custom [`FileRead`] source.
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Resolves `root` and every file it transitively includes into one
    /// self-contained source blob.
    ///
    /// The root file's own lines pass through unguarded, which also keeps a
    /// leading `#version` directive first in the output.
    pub fn resolve(&self, root: impl AsRef<Path>) -> Result<String, ResolveError> {
        let root = root.as_ref();

        // The root is on the chain for the whole call: a descendant that
        // includes it back is a cycle.
        let mut chain = vec![root.to_path_buf()];
        let mut cache = HashMap::new();

        let out = self.expand(root, &mut chain, &mut cache)?;
        log::debug!(
            "resolved '{}': {} include(s), {} bytes",
            root.display(),
            cache.len(),
            out.len()
        );
        Ok(out)
    }

    fn expand(
        &self,
        path: &Path,
        chain: &mut Vec<PathBuf>,
        cache: &mut HashMap<String, String>,
    ) -> Result<String, ResolveError> {
        log::trace!("reading '{}'", path.display());
        let text = self.reader.read(path).map_err(|source| ResolveError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut out = String::with_capacity(text.len());
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1; // 1-based, as compilers report it

            if !line.contains(INCLUDE_MARKER) {
                out.push_str(line);
                out.push('\n');
                continue;
            }

            let request = parse_directive(path, line_no, line)?;
            let target = sibling_path(path, request);

            if chain.contains(&target) {
                return Err(ResolveError::Cycle { path: target });
            }

            if cache.contains_key(request) {
                // Already emitted earlier in this blob; the guard makes a
                // second copy a no-op, so skip straight to the line reset.
                log::trace!("'{request}' already expanded, skipping");
            } else {
                chain.push(target.clone());
                let expanded = self.expand(&target, chain, cache)?;
                chain.pop();

                let guard = guard_name(request);
                out.push_str(&format!("#ifndef {guard}\n#define {guard}\n#line 1\n"));
                out.push_str(&expanded);
                out.push_str("#endif\n");

                cache.insert(request.to_owned(), expanded);
            }

            // Restore the including file's line count for diagnostics after
            // the inserted block.
            out.push_str(&format!("#line {}\n", line_no + 1));
        }

        Ok(out)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────

/// Extracts the quoted path from an include line: the text between the first
/// and last double quote.
fn parse_directive<'l>(
    path: &Path,
    line_no: usize,
    line: &'l str,
) -> Result<&'l str, ResolveError> {
    let malformed = || ResolveError::MalformedDirective {
        path: path.to_path_buf(),
        line: line_no,
        content: line.to_owned(),
    };

    let first = line.find('"').ok_or_else(|| malformed())?;
    let last = line.rfind('"').filter(|&q| q > first).ok_or_else(|| malformed())?;
    Ok(&line[first + 1..last])
}

/// Joins an include path against the directory of the including file.
///
/// A file with no directory component uses the include path as-is.
fn sibling_path(current: &Path, request: &str) -> PathBuf {
    match current.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(request),
        _ => PathBuf::from(request),
    }
}

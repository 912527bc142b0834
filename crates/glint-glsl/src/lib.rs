//! Recursive `#include` preprocessor for GLSL shader sources.
//!
//! GLSL has no `#include`; this crate extends it with one. Given a root
//! source file, [`IncludeResolver`] reads it and every file it transitively
//! includes, producing a single flattened blob ready to hand to the shader
//! compiler — safe against cycles, with each included file expanded once per
//! root request and wrapped in a generated include guard, and with `#line`
//! directives so compiler diagnostics still point at the original lines.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ResolveError` |
//! | [`guard`] | include-guard name derivation |
//! | [`read`] | `FileRead`, `FsRead`, `MemoryRead` |
//! | [`resolver`] | `IncludeResolver` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use glint_glsl::{IncludeResolver, MemoryRead};
//!
//! let mut files = MemoryRead::new();
//! files
//!     .insert("main.glsl", "#version 330 core\n#include \"common.glsl\"\n")
//!     .insert("common.glsl", "float x = 1.0;\n");
//!
//! let blob = IncludeResolver::with_reader(files).resolve("main.glsl").unwrap();
//! assert!(blob.contains("#ifndef _COMMON_GLSL_"));
//! assert!(blob.contains("float x = 1.0;"));
//! assert!(!blob.contains("#include"));
//! ```

pub mod error;
pub mod guard;
pub mod read;
pub mod resolver;

pub use error::ResolveError;
pub use read::{FileRead, FsRead, MemoryRead};
pub use resolver::IncludeResolver;

//! `spectree_core` is the resolution engine behind
//! [spectree](https://github.com/spectree/spectree). It flattens multi-file
//! markdown documentation by replacing every line of the form `@path.md` with
//! the resolved content of the referenced file.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Start document
//!   → Loader (reads UTF-8 text, classifies missing and unreadable files)
//!   → Parser (recognizes whole-line `@path.md` references)
//!   → Path resolver (resolves targets against the referencing file, enforces the root boundary)
//!   → Engine (recurses into targets, detects cycles, splices results back in place)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `spectree.toml`.
//! - [`path`] — Lexical path normalization and root containment checks.
//!
//! ## Key Types
//!
//! - [`Resolver`] — A single resolution session owning the root boundary and
//!   the stack of files being expanded.
//! - [`ResolveOptions`] — Root directory override and strict validation.
//! - [`ContentLoader`] — The storage seam; [`FsLoader`] reads from disk and
//!   [`MemoryLoader`] serves in-memory fixtures.
//! - [`SpecTreeError`] — One variant per failure kind, each with structured
//!   payload.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spectree_core::ResolveOptions;
//! use spectree_core::resolve;
//!
//! let output = resolve("docs/main.md", ResolveOptions::default()).unwrap();
//! print!("{output}");
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use loader::*;
pub use parser::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
mod loader;
mod parser;
pub mod path;

#[cfg(test)]
mod __fixtures;

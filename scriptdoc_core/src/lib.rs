//! `scriptdoc_core` renders reference documentation for the Sandman Lua API
//! from a single JSON definitions file. Every function gets an index entry, a
//! documentation block and synthesized call examples, with no hand-written
//! prose or example code.
//!
//! ## Processing Pipeline
//!
//! ```text
//! api_definitions.json
//!   → Loader (parses JSON, fails on missing or malformed input)
//!   → Classifier (function / module / metadata, once, at load time)
//!   → Signature (ordered params and return values, tolerating absence)
//!   → Examples (argument lists, usage lines, try-variant calls)
//!   → Renderer (overview, global and per-module pages with front matter)
//!   → Writer (one markdown file per page, replaced atomically)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `scriptdoc.toml`.
//! - [`naming`] — Qualified names, anchors and the `try_` naming rule.
//! - [`example`] — Call example synthesis.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scriptdoc_core::GenerateOptions;
//! use scriptdoc_core::ScriptdocConfig;
//! use scriptdoc_core::generate;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = ScriptdocConfig::load_or_default(root).unwrap();
//! let result = generate(&GenerateOptions::from_config(root, &config)).unwrap();
//! for name in result.manifest() {
//!     println!("   - {name}");
//! }
//! ```

pub use config::*;
pub use definition::*;
pub use engine::*;
pub use error::*;
pub use render::*;
pub use signature::*;
pub use writer::*;

pub mod config;
mod definition;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod example;
pub mod naming;
mod render;
mod signature;
mod writer;

#[cfg(test)]
mod __fixtures;

//! `dwt_core` scans and transcodes the legacy Dreamweaver template dialect:
//! HTML documents whose editable structure is described by markers embedded
//! in comments. A *master* document (`.dwt`) declares named editable regions
//! and typed params with `Template`-dialect markers; pages derived from it
//! carry the same structure in the `Instance` dialect, wrapped by an
//! instance-begin marker that records which master they came from.
//!
//! ## Processing pipeline
//!
//! ```text
//! Master document (.dwt)
//!   → lexer (tokenizes markup into comments, tags, doctype, and text)
//!   → classifier (recognizes the five marker kinds in both dialects)
//!   → scanner (single pass: builds the region/param model)
//!   → transcoder (single pass: rewrites markers into the instance dialect,
//!     re-synthesizing the wrapper and param declarations at their
//!     canonical insertion points)
//! ```
//!
//! Both passes walk the token stream exactly once, classify each comment
//! without lookahead, and track region nesting with an explicit stack. Every
//! pass owns its own state, so independent documents can be processed
//! concurrently; within one document the stream is strictly sequential.
//!
//! ## Modules
//!
//! - [`markers`] — the marker grammar: exact wire formats and the patterns
//!   recognizing them.
//! - [`classify`] — comment classification into the closed marker set.
//! - [`lexer`] / [`tokens`] — the minimal HTML tokenizer and token surface.
//! - [`config`] — `dwt.toml` loading (directories, filters, target prefix).
//! - [`project`] — master discovery and batch generation.
//!
//! ## Quick start
//!
//! ```rust
//! use dwt_core::TranscodeOptions;
//! use dwt_core::scan;
//! use dwt_core::transcode;
//!
//! let master = "<html><head><!-- TemplateBeginEditable name=\"doctitle\" \
//!               --><title>Home</title><!-- TemplateEndEditable --></head><body></body></html>";
//!
//! let model = scan(master);
//! assert_eq!(
//! 	model.region("doctitle").map(|region| region.value.as_str()),
//! 	Some("<title>Home</title>")
//! );
//!
//! let page = transcode(master, &model, &TranscodeOptions::new("/Templates/home.dwt"));
//! assert!(page.contains("<!-- InstanceBeginEditable name=\"doctitle\" -->"));
//! ```

pub use classify::*;
pub use config::*;
pub use error::*;
pub use lexer::*;
pub use markers::*;
pub use model::*;
pub use project::*;
pub use render::*;
pub use scanner::*;
pub use strings::*;
pub use tokens::*;
pub use transcoder::*;

pub mod classify;
pub mod config;
mod error;
pub mod lexer;
pub mod markers;
mod model;
pub mod project;
mod render;
mod scanner;
mod strings;
pub mod tokens;
mod transcoder;

#[cfg(test)]
mod __fixtures;

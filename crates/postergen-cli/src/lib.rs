//! postergen CLI - Command-line interface library
//!
//! This library provides the CLI functionality for postergen:
//! read a Markdown file, paginate it into fixed-size slides and write
//! an HTML preview or JSON deck plus a layout log.
//!
//! # Library Usage
//!
//! ```ignore
//! use postergen_cli::{run_cli, build_command, Config, RenderFormat};
//!
//! // Run the full CLI
//! run_cli();
//!
//! // Or drive the build programmatically
//! build_command(&input, &Config::default(), RenderFormat::Html, false)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Build an HTML preview
//! postergen post.md --output dist/
//!
//! # Emit the deck as JSON for downstream tooling
//! postergen post.md --format json
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{build_command, run_cli, RenderFormat};
pub use config::Config;

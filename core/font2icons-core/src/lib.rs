//! font2icons-core: turn every glyph of a font into its own SVG file.
//!
//! The crate is split along the steps of a single export run:
//!
//! - [`paths`]: resolve the input font and prepare the output directory
//! - [`glyphs`]: decode the font's character map into a [`GlyphCollection`]
//! - [`svg`]: record outlines and serialize them as SVG documents
//! - [`export`]: write one `{code}.svg` per glyph and collect an [`ExportReport`]
//! - [`pipeline`]: the resolve → decode → export sequence used by the CLI
//!
//! ```rust,no_run
//! use font2icons_core::config::Config;
//! use font2icons_core::pipeline::convert;
//!
//! let config = Config::new("fonts/iconfont.ttf", "images").clear(true);
//! let cwd = std::env::current_dir()?;
//! let report = convert(&config, &cwd)?;
//!
//! println!("wrote {} icons to {}", report.written.len(), report.output.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Made by FontLab https://www.fontlab.com/

pub mod config;
pub mod error;
pub mod export;
pub mod glyphs;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod svg;

pub use error::{Error, Result};
pub use export::{ExportFailure, ExportReport};
pub use glyphs::{FontFile, FontMetrics, Glyph, GlyphCollection, GlyphSource};

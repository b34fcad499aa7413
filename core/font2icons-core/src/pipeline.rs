//! Resolve, decode, export (made by FontLab https://www.fontlab.com/)

use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::{export_glyphs, ExportReport};
use crate::glyphs::{FontFile, GlyphSource};
use crate::paths::{prepare_output, resolve_input};

/// Run one export with relative paths resolved against `base`.
///
/// The input is checked and read before the output directory is touched, so
/// a missing font leaves the filesystem unchanged and a font stored inside a
/// cleared output directory is still decoded.
pub fn convert(config: &Config, base: &Path) -> Result<ExportReport> {
    if config.input.as_os_str().is_empty() {
        return Err(Error::MissingInputArgument);
    }

    let input = resolve_input(&config.input, base)?;
    let font = FontFile::load(&input, config.face_index)?;
    let output = prepare_output(&config.output, base, config.clear)?;
    info!("font to convert: {}", input.display());
    info!("output directory: {}", output.display());

    let faces = font.face_count()?;
    if faces > 1 {
        info!("collection with {faces} faces, exporting face {}", config.face_index);
    }
    convert_source(&font, &output, config)
        .map(|report| ExportReport { input, ..report })
}

/// Export the glyphs of any [`GlyphSource`] into an already prepared directory.
pub fn convert_source(
    source: &impl GlyphSource,
    output: &Path,
    config: &Config,
) -> Result<ExportReport> {
    let glyphs = source.glyphs()?;
    export_glyphs(output, &glyphs, config.jobs)
}

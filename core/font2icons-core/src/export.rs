//! Writing one SVG file per glyph (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::glyphs::{Glyph, GlyphCollection};

/// A glyph that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub code: u32,
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Codes whose SVG file was written, ascending.
    pub written: Vec<u32>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write `{out_dir}/{code}.svg` for every glyph.
///
/// A failed write is logged and recorded in the report; the remaining glyphs
/// are still written. `jobs` of `None` writes sequentially on the calling
/// thread, `Some(n)` spreads the writes over a dedicated pool of `n` threads.
pub fn export_glyphs(
    out_dir: &Path,
    glyphs: &GlyphCollection,
    jobs: Option<usize>,
) -> Result<ExportReport> {
    let outcomes: Vec<(u32, Result<(), ExportFailure>)> = match jobs {
        None => glyphs
            .iter()
            .map(|(code, glyph)| (*code, write_glyph(out_dir, glyph)))
            .collect(),
        Some(jobs) => {
            let pool = ThreadPoolBuilder::new().num_threads(jobs).build()?;
            let work: Vec<&Glyph> = glyphs.iter().map(|(_, glyph)| glyph).collect();
            pool.install(|| {
                work.par_iter()
                    .map(|glyph| (glyph.code, write_glyph(out_dir, glyph)))
                    .collect::<Vec<_>>()
            })
        }
    };

    let mut report = ExportReport {
        output: out_dir.to_path_buf(),
        ..ExportReport::default()
    };

    for (code, outcome) in outcomes {
        match outcome {
            Ok(()) => report.written.push(code),
            Err(failure) => report.failures.push(failure),
        }
    }

    report.written.sort_unstable();
    report.failures.sort_by_key(|f| f.code);

    info!(
        "wrote {} of {} glyphs to {}",
        report.written.len(),
        glyphs.len(),
        out_dir.display()
    );
    Ok(report)
}

fn write_glyph(out_dir: &Path, glyph: &Glyph) -> Result<(), ExportFailure> {
    let path = out_dir.join(glyph.file_name());
    fs::write(&path, glyph.to_svg()).map_err(|source| {
        let err = Error::WriteFailure {
            path: path.clone(),
            source,
        };
        error!("{err}");
        ExportFailure {
            code: glyph.code,
            path,
            message: err.to_string(),
        }
    })
}

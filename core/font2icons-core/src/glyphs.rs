//! Font decoding into per-code-point glyph outlines (made by FontLab https://www.fontlab.com/)

use std::collections::btree_map::{self, BTreeMap};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use read_fonts::{FileRef, FontRef};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::MetadataProvider;

use crate::error::{Error, Result};
use crate::svg::{glyph_to_svg, Outline};

/// Vertical font metrics in font units, shared by every glyph of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascent: f32,
    /// Usually negative.
    pub descent: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Unicode code point the glyph is mapped from.
    pub code: u32,
    pub glyph_id: u32,
    pub advance: f32,
    pub metrics: FontMetrics,
    pub outline: Outline,
}

impl Glyph {
    pub fn to_svg(&self) -> String {
        glyph_to_svg(self)
    }

    /// File name the exporter uses for this glyph.
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.code)
    }
}

/// Glyphs keyed by code point.
///
/// Iteration happens to be ascending, but callers must not depend on any
/// particular order: each glyph is exported independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphCollection {
    glyphs: BTreeMap<u32, Glyph>,
}

impl GlyphCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a glyph under its code, returning the glyph it replaced.
    pub fn insert(&mut self, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(glyph.code, glyph)
    }

    pub fn get(&self, code: u32) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, Glyph> {
        self.glyphs.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.glyphs.keys().copied()
    }
}

impl FromIterator<Glyph> for GlyphCollection {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        let mut collection = Self::new();
        for glyph in iter {
            collection.insert(glyph);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a GlyphCollection {
    type Item = (&'a u32, &'a Glyph);
    type IntoIter = btree_map::Iter<'a, u32, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Anything that can produce the glyphs to export.
pub trait GlyphSource {
    fn glyphs(&self) -> Result<GlyphCollection>;
}

impl GlyphSource for GlyphCollection {
    fn glyphs(&self) -> Result<GlyphCollection> {
        Ok(self.clone())
    }
}

/// A font file loaded into memory, decoded with skrifa.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
    face_index: u32,
}

impl FontFile {
    /// Read `path` and check that face `face_index` can be parsed.
    pub fn open(path: &Path, face_index: u32) -> Result<Self> {
        let font = Self::load(path, face_index)?;
        font.face()?;
        Ok(font)
    }

    /// Read the font bytes without parsing them yet.
    ///
    /// Once loaded, the file on disk may go away (e.g. a cleared output
    /// directory) without affecting decoding.
    pub fn load(path: &Path, face_index: u32) -> Result<Self> {
        let data = fs::read(path).map_err(|e| Error::decode(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            data,
            face_index,
        })
    }

    /// Number of faces in the file: 1 for plain fonts, N for TTC/OTC.
    pub fn face_count(&self) -> Result<u32> {
        match FileRef::new(&self.data).map_err(|e| Error::decode(&self.path, e))? {
            FileRef::Font(_) => Ok(1),
            FileRef::Collection(collection) => Ok(collection.len()),
        }
    }

    fn face(&self) -> Result<FontRef<'_>> {
        let file = FileRef::new(&self.data).map_err(|e| Error::decode(&self.path, e))?;
        match file {
            FileRef::Font(font) if self.face_index == 0 => Ok(font),
            FileRef::Font(_) => Err(Error::decode(
                &self.path,
                format!("face index {} requested from a single font", self.face_index),
            )),
            FileRef::Collection(collection) => {
                let count = collection.len();
                if self.face_index >= count {
                    return Err(Error::decode(
                        &self.path,
                        format!(
                            "face index {} out of range (collection has {count} faces)",
                            self.face_index
                        ),
                    ));
                }
                collection
                    .get(self.face_index)
                    .map_err(|e| Error::decode(&self.path, e))
            }
        }
    }
}

impl GlyphSource for FontFile {
    fn glyphs(&self) -> Result<GlyphCollection> {
        let font = self.face()?;
        let size = Size::unscaled();
        let location = LocationRef::default();

        let font_metrics = font.metrics(size, location);
        let metrics = FontMetrics {
            units_per_em: font_metrics.units_per_em,
            ascent: font_metrics.ascent,
            descent: font_metrics.descent,
        };
        let advances = font.glyph_metrics(size, location);
        let outlines = font.outline_glyphs();

        let mut collection = GlyphCollection::new();
        for (code, gid) in font.charmap().mappings() {
            let mut outline = Outline::new();
            match outlines.get(gid) {
                Some(glyph) => {
                    glyph
                        .draw(DrawSettings::unhinted(size, location), &mut outline)
                        .map_err(|e| {
                            Error::decode(&self.path, format!("glyph for U+{code:04X}: {e}"))
                        })?;
                }
                None => debug!("no outline for U+{code:04X} (gid {})", gid.to_u32()),
            }

            collection.insert(Glyph {
                code,
                glyph_id: gid.to_u32(),
                advance: advances.advance_width(gid).unwrap_or_default(),
                metrics,
                outline,
            });
        }

        info!(
            "decoded {} glyphs from {} (face {})",
            collection.len(),
            self.path.display(),
            self.face_index
        );
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn glyph(code: u32) -> Glyph {
        Glyph {
            code,
            glyph_id: code,
            advance: 500.0,
            metrics: FontMetrics {
                units_per_em: 1000,
                ascent: 800.0,
                descent: -200.0,
            },
            outline: Outline::new(),
        }
    }

    #[test]
    fn collection_keys_are_unique() {
        let mut glyphs = GlyphCollection::new();
        assert!(glyphs.insert(glyph(65)).is_none());
        assert!(glyphs.insert(glyph(65)).is_some());
        glyphs.insert(glyph(66));

        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs.get(66).map(|g| g.code), Some(66));
    }

    #[test]
    fn file_name_uses_decimal_code() {
        assert_eq!(glyph(0xE600).file_name(), "58880.svg");
    }

    #[test]
    fn garbage_bytes_are_a_decode_failure() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("broken.ttf");
        fs::write(&path, b"definitely not a font").expect("write");

        let err = FontFile::open(&path, 0).unwrap_err();
        assert!(matches!(err, Error::DecodeFailure { .. }), "got {err}");
    }

    #[test]
    fn unreadable_path_is_a_decode_failure() {
        let tmp = tempdir().expect("tempdir");
        let err = FontFile::open(tmp.path(), 0).unwrap_err();
        assert!(matches!(err, Error::DecodeFailure { .. }), "got {err}");
    }
}

#![allow(dead_code)]

use std::env;
use std::path::PathBuf;

const FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/truetype/liberation",
];

/// Locate a TrueType/OpenType font to run real decoding against.
///
/// `FONT2ICONS_TEST_FONT` wins; otherwise a few well-known system fonts are
/// tried. Tests return early when nothing is found.
pub fn test_font() -> Option<PathBuf> {
    if let Ok(env_override) = env::var("FONT2ICONS_TEST_FONT") {
        if let Ok(path) = PathBuf::from(env_override).canonicalize() {
            if path.is_file() {
                return Some(path);
            }
        }
    }

    let mut candidates: Vec<PathBuf> = FONT_DIRS
        .iter()
        .flat_map(|dir| {
            ["DejaVuSans.ttf", "LiberationSans-Regular.ttf"]
                .into_iter()
                .map(move |name| PathBuf::from(dir).join(name))
        })
        .collect();
    candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"));
    candidates.push(PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"));

    candidates.into_iter().find(|candidate| candidate.is_file())
}

/// Two different single fonts from the same family directory, used to
/// assemble a collection.
pub fn test_font_pair() -> Option<(PathBuf, PathBuf)> {
    let pairs = [
        ("DejaVuSans.ttf", "DejaVuSansMono.ttf"),
        ("LiberationSans-Regular.ttf", "LiberationMono-Regular.ttf"),
    ];

    FONT_DIRS.iter().find_map(|dir| {
        pairs.iter().find_map(|(a, b)| {
            let a = PathBuf::from(dir).join(a);
            let b = PathBuf::from(dir).join(b);
            (a.is_file() && b.is_file()).then_some((a, b))
        })
    })
}

/// Pack single sfnt fonts into a version 1.0 `ttcf` collection.
///
/// Each face keeps its own tables; only the table-record offsets are moved
/// by the position the face lands at inside the collection.
pub fn build_collection(faces: &[Vec<u8>]) -> Vec<u8> {
    let header_len = 12 + 4 * faces.len();
    let mut bases = Vec::with_capacity(faces.len());
    let mut next = header_len;
    for face in faces {
        bases.push(next);
        next = (next + face.len() + 3) & !3;
    }

    let mut out = Vec::with_capacity(next);
    out.extend_from_slice(b"ttcf");
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&(faces.len() as u32).to_be_bytes());
    for base in &bases {
        out.extend_from_slice(&(*base as u32).to_be_bytes());
    }

    for (face, base) in faces.iter().zip(&bases) {
        let mut face = face.clone();
        let num_tables = u16::from_be_bytes([face[4], face[5]]) as usize;
        for record in 0..num_tables {
            let at = 12 + record * 16 + 8;
            let offset = u32::from_be_bytes([face[at], face[at + 1], face[at + 2], face[at + 3]]);
            let shifted = offset + *base as u32;
            face[at..at + 4].copy_from_slice(&shifted.to_be_bytes());
        }
        out.resize(*base, 0);
        out.extend_from_slice(&face);
    }

    out
}

//! Run configuration (made by FontLab https://www.fontlab.com/)

use std::path::PathBuf;

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT: &str = "images";

/// Everything one export run needs, built once and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool,
    pub input: PathBuf,
    pub output: PathBuf,
    pub clear: bool,
    /// Face to read from a TTC/OTC collection; ignored for single fonts.
    pub face_index: u32,
    /// Worker threads for writing files. `None` writes sequentially.
    pub jobs: Option<usize>,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            verbose: false,
            input: input.into(),
            output: output.into(),
            clear: false,
            face_index: 0,
            jobs: None,
        }
    }

    pub fn verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    pub fn clear(mut self, yes: bool) -> Self {
        self.clear = yes;
        self
    }

    pub fn face_index(mut self, index: u32) -> Self {
        self.face_index = index;
        self
    }

    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }
}

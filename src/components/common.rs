use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The font file converted when no input path is given.
pub const DEFAULT_INPUT: &str = "Amiri.ttf";

/// Extension given to the output when only an input path is known.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum FontB64Error {
    /// The input file could not be opened or read.
    #[error("cannot read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be opened, created or written.
    #[error("cannot write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "output {} already exists and overwriting is disabled",
        .0.display()
    )]
    OutputExists(PathBuf),
}

/// Which file to read, which file to write and whether an existing
/// output may be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub overwrite: bool,
}

impl ConvertConfig {
    /// Overwrites an existing output, matching the behaviour of a plain
    /// `open(path, "w")`.
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            overwrite: true,
        }
    }

    /// Config whose output sits next to the input with a `.txt` extension.
    pub fn from_input(input_path: impl Into<PathBuf>) -> Self {
        let input_path = input_path.into();
        let output_path = default_output_path(&input_path);
        Self::new(input_path, output_path)
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::from_input(DEFAULT_INPUT)
    }
}

/// `fonts/Amiri.ttf` -> `fonts/Amiri.txt`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(DEFAULT_OUTPUT_EXTENSION)
}

/// Sizes of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input_len: usize,
    pub output_len: usize,
}

//! Split orchestration: configuration, the pure transform, and the
//! filesystem adapter that turns one binary into four hex files.

use crate::hexfile::{self, LaneFile};
use crate::lanes::{self, LaneSet, WORD_BYTES};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word capacity of one BSRAM block in the reference hardware
/// configuration. Used whenever the caller supplies no explicit capacity.
pub const DEFAULT_TARGET_WORDS: usize = 2048;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("invalid target capacity {0}: must be at least one word")]
    InvalidCapacity(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings for one split run.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Capacity of the destination memory block, in words.
    pub target_words: usize,
    /// Directory the four hex files are written into.
    pub out_dir: PathBuf,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            target_words: DEFAULT_TARGET_WORDS,
            out_dir: PathBuf::from("."),
        }
    }
}

/// Record of one completed split.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Bytes read from the source image.
    pub source_bytes: usize,
    /// Image size after alignment padding.
    pub padded_bytes: usize,
    /// Words extracted from the padded image.
    pub word_count: usize,
    /// Declared capacity of the destination block.
    pub target_words: usize,
    /// `word_count / target_words`, as a percentage.
    pub utilization: f64,
}

impl Summary {
    fn new(source_bytes: usize, padded_bytes: usize, target_words: usize) -> Self {
        let word_count = padded_bytes / WORD_BYTES;
        Summary {
            source_bytes,
            padded_bytes,
            word_count,
            target_words,
            utilization: word_count as f64 / target_words as f64 * 100.0,
        }
    }

    /// True when the image holds more words than the declared capacity.
    pub fn is_overflow(&self) -> bool {
        self.word_count > self.target_words
    }
}

/// Result of a filesystem split: the run summary plus one record per
/// written hex file, in lane order.
#[derive(Debug)]
pub struct SplitReport {
    pub summary: Summary,
    pub files: Vec<LaneFile>,
}

/// Split an in-memory image into target-padded byte lanes.
///
/// Pure transform, no filesystem access. The returned lanes are already
/// zero-filled to `target_words` entries, or longer when the image
/// overflows the capacity (overflow pads nothing and truncates nothing).
pub fn split(image: &[u8], target_words: usize) -> Result<(LaneSet, Summary), SplitError> {
    if target_words == 0 {
        return Err(SplitError::InvalidCapacity(target_words));
    }

    let padded = lanes::word_align(image);
    let summary = Summary::new(image.len(), padded.len(), target_words);

    let mut lane_set = lanes::deinterleave(&padded);
    lane_set.pad_to(target_words);

    Ok((lane_set, summary))
}

/// Read a firmware binary and write its four lane hex files.
///
/// All fatal conditions (missing input, zero capacity) are raised before
/// anything is written; existing output files are then overwritten
/// unconditionally.
pub fn split_file(input: &Path, config: &SplitConfig) -> Result<SplitReport, SplitError> {
    if !input.is_file() {
        return Err(SplitError::InputNotFound(input.to_path_buf()));
    }

    let image = fs::read(input)?;
    let (lane_set, summary) = split(&image, config.target_words)?;
    let files = hexfile::write_lanes(&lane_set, &config.out_dir)?;

    Ok(SplitReport { summary, files })
}

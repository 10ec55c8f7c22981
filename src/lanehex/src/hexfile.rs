//! Hex line emission.
//!
//! Each lane becomes one text file holding a single two-digit lower-case
//! hex token per line, the format the BSRAM initialization blocks read.

use crate::lanes::{LaneSet, LANE_COUNT};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stem shared by all four output files.
pub const FILE_STEM: &str = "firmware";

/// Output path for one lane index: `<out_dir>/firmware_b<lane>.hex`.
pub fn lane_path(out_dir: &Path, lane: usize) -> PathBuf {
    out_dir.join(format!("{FILE_STEM}_b{lane}.hex"))
}

/// Record of one written hex file.
#[derive(Debug, Clone)]
pub struct LaneFile {
    /// Where the file was written.
    pub path: PathBuf,
    /// Lines (one per word) the file holds.
    pub lines: usize,
}

/// Encode one lane as newline-terminated two-digit hex tokens.
pub fn encode_lane(lane: &[u8]) -> String {
    lane.iter().map(|byte| format!("{byte:02x}\n")).collect()
}

/// Write all four lane files into `out_dir`, lane 0 through lane 3.
///
/// Existing files at the target paths are replaced.
pub fn write_lanes(lane_set: &LaneSet, out_dir: &Path) -> io::Result<Vec<LaneFile>> {
    let mut files = Vec::with_capacity(LANE_COUNT);

    for (index, lane) in lane_set.iter().enumerate() {
        let path = lane_path(out_dir, index);
        fs::write(&path, encode_lane(lane))?;
        files.push(LaneFile {
            path,
            lines: lane.len(),
        });
    }

    Ok(files)
}

//! # lanehex
//!
//! Firmware byte-lane splitter for FPGA block-memory initialization.
//!
//! A 32-bit soft core fetches instructions from four parallel BSRAM
//! blocks, each storing one byte position of every word. This library
//! provides functionality to:
//! - Zero-pad a flat firmware image to a whole number of 32-bit words
//! - De-interleave the image into four byte-lane sequences
//! - Pad each lane to the capacity of the destination memory block
//! - Emit each lane as a hex-per-line text file
//!
//! ## Example
//!
//! ```no_run
//! use lanehex::{split_file, SplitConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig::default();
//! let report = split_file("firmware.bin".as_ref(), &config)?;
//!
//! for file in &report.files {
//!     println!("wrote {}", file.path.display());
//! }
//! println!(
//!     "words used: {}/{}",
//!     report.summary.word_count, report.summary.target_words
//! );
//! # Ok(())
//! # }
//! ```

pub mod hexfile;
pub mod lanes;
pub mod split;

// Re-export commonly used items
#[doc(inline)]
pub use hexfile::{encode_lane, lane_path, write_lanes, LaneFile, FILE_STEM};
#[doc(inline)]
pub use lanes::{deinterleave, word_align, LaneSet, LANE_COUNT, WORD_BYTES};
#[doc(inline)]
pub use split::{
    split, split_file, SplitConfig, SplitError, SplitReport, Summary, DEFAULT_TARGET_WORDS,
};

//! Word alignment and byte-lane extraction.
//!
//! The FPGA addresses firmware as 32-bit words, but each BSRAM block
//! behind the word stores a single byte position. This module turns the
//! flat image into the four per-position sequences those blocks are
//! initialized from.

use byteorder::{ByteOrder, LittleEndian};

/// Bytes per memory word.
pub const WORD_BYTES: usize = 4;

/// Byte lanes per word, one per BSRAM block.
pub const LANE_COUNT: usize = 4;

/// The four byte-lane sequences extracted from one image.
///
/// Lane 0 holds the least-significant byte of every word, lane 3 the
/// most-significant. All lanes always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSet {
    lanes: [Vec<u8>; LANE_COUNT],
}

impl LaneSet {
    /// Number of words represented by each lane.
    pub fn word_count(&self) -> usize {
        self.lanes[0].len()
    }

    /// Bytes of one lane, in word order.
    ///
    /// # Panics
    /// Panics if `index >= LANE_COUNT`.
    pub fn lane(&self, index: usize) -> &[u8] {
        &self.lanes[index]
    }

    /// Lanes in emission order (0 = LSB through 3 = MSB).
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.lanes.iter().map(Vec::as_slice)
    }

    /// Zero-fill every lane up to `target_words` entries.
    ///
    /// Lanes already at or beyond the target are left untouched: real
    /// firmware data is never truncated to fit a declared capacity.
    pub fn pad_to(&mut self, target_words: usize) {
        for lane in &mut self.lanes {
            if lane.len() < target_words {
                lane.resize(target_words, 0x00);
            }
        }
    }
}

/// Copy `image` and zero-pad it to a whole number of words.
pub fn word_align(image: &[u8]) -> Vec<u8> {
    let mut padded = image.to_vec();
    let rem = padded.len() % WORD_BYTES;
    if rem != 0 {
        padded.resize(padded.len() + (WORD_BYTES - rem), 0x00);
    }
    padded
}

/// Scatter each word of a word-aligned image into the four byte lanes.
///
/// Word order is preserved and byte offset `k` within a word always lands
/// in lane `k`. The input must already be word-aligned (`word_align`).
pub fn deinterleave(padded: &[u8]) -> LaneSet {
    debug_assert_eq!(padded.len() % WORD_BYTES, 0, "image must be word-aligned");

    let word_count = padded.len() / WORD_BYTES;
    let mut lanes: [Vec<u8>; LANE_COUNT] = std::array::from_fn(|_| Vec::with_capacity(word_count));

    for chunk in padded.chunks_exact(WORD_BYTES) {
        let word = LittleEndian::read_u32(chunk);
        for (lane, byte) in lanes.iter_mut().zip(word.to_le_bytes()) {
            lane.push(byte);
        }
    }

    LaneSet { lanes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_align_pads_short_tail_with_zeros() {
        let padded = word_align(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[5..], &[0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_word_align_keeps_aligned_input() {
        let image = [0xaa; 8];
        assert_eq!(word_align(&image), image);
    }

    #[test]
    fn test_word_align_empty() {
        assert!(word_align(&[]).is_empty());
    }

    #[test]
    fn test_deinterleave_scatters_by_byte_offset() {
        let padded = [0x01, 0x02, 0x03, 0x04, 0x05, 0x00, 0x00, 0x00];
        let set = deinterleave(&padded);

        assert_eq!(set.word_count(), 2);
        assert_eq!(set.lane(0), &[0x01, 0x05]);
        assert_eq!(set.lane(1), &[0x02, 0x00]);
        assert_eq!(set.lane(2), &[0x03, 0x00]);
        assert_eq!(set.lane(3), &[0x04, 0x00]);
    }

    #[test]
    fn test_deinterleave_empty() {
        let set = deinterleave(&[]);
        assert_eq!(set.word_count(), 0);
    }

    #[test]
    fn test_pad_to_fills_with_zeros() {
        let mut set = deinterleave(&[0x11, 0x22, 0x33, 0x44]);
        set.pad_to(3);

        for lane in set.iter() {
            assert_eq!(lane.len(), 3);
            assert_eq!(&lane[1..], &[0x00, 0x00]);
        }
    }

    #[test]
    fn test_pad_to_never_truncates() {
        let mut set = deinterleave(&[0u8; 16]);
        set.pad_to(2);
        assert_eq!(set.word_count(), 4);
    }

    #[test]
    fn test_lanes_reassemble_into_words() {
        // Lane k of word i must be byte 4*i + k of the aligned image.
        let padded: Vec<u8> = (0..32).collect();
        let set = deinterleave(&padded);

        let mut rebuilt = Vec::new();
        for word in 0..set.word_count() {
            for lane in 0..LANE_COUNT {
                rebuilt.push(set.lane(lane)[word]);
            }
        }
        assert_eq!(rebuilt, padded);
    }
}

//! FrameBuffer - the resolved segment pattern for every digit position.

use core::ops::Index;

use heapless::Vec;

use crate::Result;
use crate::config::{MAX_DIGITS, SegmentCount};
use crate::error::Error;
use crate::glyphs;

/// One segment bitmask per digit position, rendered from the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrameBuffer {
    bits: Vec<u32, MAX_DIGITS>,
    segment_count: SegmentCount,
}

impl FrameBuffer {
    /// A blank frame for `digit_count` positions (clamped to [`MAX_DIGITS`]).
    pub(crate) fn new(digit_count: usize, segment_count: SegmentCount) -> Self {
        let mut bits = Vec::new();
        let _ = bits.resize(digit_count.min(MAX_DIGITS), glyphs::blank(segment_count));
        Self {
            bits,
            segment_count,
        }
    }

    /// Recomputes every position from `visible`; positions past its end go blank.
    pub(crate) fn render(&mut self, visible: &[char]) {
        let blank = glyphs::blank(self.segment_count);
        let segment_count = self.segment_count;
        for (position, bits) in self.bits.iter_mut().enumerate() {
            *bits = visible
                .get(position)
                .map_or(blank, |&character| glyphs::encode(character, segment_count));
        }
    }

    /// Overwrites one position with the pattern for `character`.
    ///
    /// # Errors
    ///
    /// [`Error::PositionOutOfRange`] if `position` is not a digit of this frame.
    pub(crate) fn set(&mut self, position: usize, character: char) -> Result<()> {
        let bits = self
            .bits
            .get_mut(position)
            .ok_or(Error::PositionOutOfRange(position))?;
        *bits = glyphs::encode(character, self.segment_count);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    pub(crate) fn to_vec(&self) -> Vec<u32, MAX_DIGITS> {
        self.bits.clone()
    }
}

impl Index<usize> for FrameBuffer {
    type Output = u32;

    #[expect(clippy::indexing_slicing, reason = "Caller's responsibility")]
    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

#[cfg(test)]
mod tests {
    use super::FrameBuffer;
    use crate::config::SegmentCount;
    use crate::error::Error;
    use crate::glyphs::{Seg7, encode};

    #[test]
    fn starts_blank() {
        let frame = FrameBuffer::new(4, SegmentCount::Seven);
        assert_eq!(frame.len(), 4);
        assert!(frame.to_vec().iter().all(|&bits| bits == 0));
    }

    #[test]
    fn render_encodes_the_leading_characters() {
        let mut frame = FrameBuffer::new(4, SegmentCount::Seven);
        frame.render(&['-', '1', '2', '3', '-', ' ']);
        assert_eq!(frame[0], Seg7::G);
        assert_eq!(frame[3], encode('3', SegmentCount::Seven));
    }

    #[test]
    fn render_blanks_positions_past_the_text() {
        let mut frame = FrameBuffer::new(3, SegmentCount::Sixteen);
        frame.render(&['A', 'B', 'C']);
        frame.render(&['Z']);
        assert_eq!(frame.to_vec().as_slice(), &[encode('Z', SegmentCount::Sixteen), 0, 0]);
    }

    #[test]
    fn set_writes_one_position() {
        let mut frame = FrameBuffer::new(2, SegmentCount::Seven);
        assert_eq!(frame.set(1, '4'), Ok(()));
        assert_eq!(frame.to_vec().as_slice(), &[0, Seg7::DIGITS[4]]);
        assert_eq!(frame.set(2, '4'), Err(Error::PositionOutOfRange(2)));
        assert_eq!(frame.to_vec().as_slice(), &[0, Seg7::DIGITS[4]]);
    }
}

//! The display text and its scroll offset.
//!
//! The characters are stored rotated: index 0 is always the first visible character, and
//! `offset` records how far the text has been rotated from the way it was set.

use heapless::Vec;

use crate::Result;
use crate::config::TEXT_CAPACITY;
use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextBuffer {
    chars: Vec<char, TEXT_CAPACITY>,
    offset: usize,
}

impl TextBuffer {
    /// Replaces the text and rewinds to its start.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyText`] for `""`, [`Error::TextTooLong`] past [`TEXT_CAPACITY`]. The current
    /// text is kept on error.
    pub(crate) fn set(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        let mut chars = Vec::new();
        for character in text.chars() {
            chars.push(character).map_err(|_| Error::TextTooLong)?;
        }
        self.chars = chars;
        self.offset = 0;
        Ok(())
    }

    /// Rotates by `step` characters: left for positive steps, right for negative ones.
    ///
    /// Steps wrap modulo the text length, so the offset always stays in `0..len`.
    pub(crate) fn shift(&mut self, step: i32) {
        if let Some(count) = self.left_rotation(i64::from(step)) {
            self.rotate_left(count);
        }
    }

    /// Rotates so that character `target` (counted in the text as originally set, modulo its
    /// length) becomes the first visible one.
    pub(crate) fn move_to(&mut self, target: i32) {
        let Ok(offset) = i64::try_from(self.offset) else {
            return;
        };
        if let Some(count) = i64::from(target)
            .checked_sub(offset)
            .and_then(|step| self.left_rotation(step))
        {
            self.rotate_left(count);
        }
    }

    /// `step` as a left rotation in `0..len`; `None` for an empty buffer.
    fn left_rotation(&self, step: i64) -> Option<usize> {
        let len = i64::try_from(self.chars.len())
            .ok()
            .filter(|&len| len > 0)?;
        usize::try_from(step.rem_euclid(len)).ok()
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "count and offset are both below the non-zero length"
    )]
    fn rotate_left(&mut self, count: usize) {
        let len = self.chars.len();
        self.chars.rotate_left(count);
        self.offset = (self.offset + count) % len;
    }

    /// The character shown at `position`, if the text reaches that far.
    pub(crate) fn get(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    pub(crate) fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub(crate) const fn offset(&self) -> usize {
        self.offset
    }
}

//! Character to segment-pattern tables for 7- and 16-segment digits.
//!
//! Bit *i* of a pattern drives segment line *i*, in the order the segment pins were given to
//! [`SegDisplay::new`](crate::SegDisplay::new). The tables are fixed wiring contracts; do not
//! "tidy" individual patterns.
//!
//! The two alphabets handle unknown characters differently on purpose: the 7-segment table shows
//! [`Seg7::UNKNOWN`] so an unencodable character is visible, while the 16-segment table leaves the
//! digit dark.

use crate::SegmentCount;

/// Encodes `character` for a display with `segment_count` strokes per digit.
///
/// Total: every character yields a pattern.
#[must_use]
pub const fn encode(character: char, segment_count: SegmentCount) -> u32 {
    match segment_count {
        SegmentCount::Seven => Seg7::encode(character),
        SegmentCount::Sixteen => Seg16::encode(character),
    }
}

/// The pattern of an unlit digit (the space glyph) for `segment_count`.
#[must_use]
pub const fn blank(segment_count: SegmentCount) -> u32 {
    encode(' ', segment_count)
}

// ============================================================================
// Seven segments
// ============================================================================

/// Constants for 7-segment digits.
///
/// ```text
///  -A-
/// F   B
///  -G-
/// E   C
///  -D-
/// ```
pub struct Seg7;

impl Seg7 {
    pub const A: u32 = 0b000_0001;
    pub const B: u32 = 0b000_0010;
    pub const C: u32 = 0b000_0100;
    pub const D: u32 = 0b000_1000;
    pub const E: u32 = 0b001_0000;
    pub const F: u32 = 0b010_0000;
    pub const G: u32 = 0b100_0000;

    /// Shown for any character outside the 7-segment alphabet: a low box (C, D, E).
    pub const UNKNOWN: u32 = Self::C | Self::D | Self::E;

    /// Segments for digits 0-9.
    pub const DIGITS: [u32; 10] = [
        0b011_1111, // 0
        0b000_0110, // 1
        0b101_1011, // 2
        0b100_1111, // 3
        0b110_0110, // 4
        0b110_1101, // 5
        0b111_1101, // 6
        0b000_0111, // 7
        0b111_1111, // 8
        0b110_1111, // 9
    ];

    /// Segments for hex letters A-F (either case).
    pub const HEX_LETTERS: [u32; 6] = [
        0b111_0111, // A
        0b111_1100, // b
        0b011_1001, // C
        0b101_1110, // d
        0b111_1001, // E
        0b111_0001, // F
    ];

    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Each range arm indexes inside its own table"
    )]
    pub const fn encode(character: char) -> u32 {
        match character {
            ' ' => 0,
            '-' => Self::G,
            '0'..='9' => Self::DIGITS[character as usize - '0' as usize],
            'A'..='F' => Self::HEX_LETTERS[character as usize - 'A' as usize],
            'a'..='f' => Self::HEX_LETTERS[character as usize - 'a' as usize],
            _ => Self::UNKNOWN,
        }
    }
}

// ============================================================================
// Sixteen segments
// ============================================================================

/// Constants for 16-segment digits.
///
/// Bits 0-15 are the strokes A1, A2, B, C, D1, D2, E, F, G1, G2, J, K, L, M, N, P; bit 16 is
/// the decimal point (the extension line).
pub struct Seg16;

impl Seg16 {
    /// The decimal point on the extension line.
    pub const DECIMAL: u32 = 1 << 16;

    #[must_use]
    pub const fn encode(character: char) -> u32 {
        match character {
            'A' => 0b0000_0011_1100_1111,
            'a' => 0b0100_0101_0101_0000,
            'B' => 0b0100_1010_0011_1111,
            'b' => 0b0100_0001_1101_0000,
            'C' | 'c' => 0b0000_0001_0101_0000,
            'D' => 0b0100_1000_0011_1111,
            'd' => 0b0100_1001_0101_0000,
            'E' => 0b0000_0001_1111_0011,
            'e' => 0b1000_0001_0111_0000,
            'F' => 0b0000_0001_1100_0011,
            'f' => 0b0100_1011_0000_0010,
            'G' => 0b0000_0010_1111_1011,
            'g' => 0b0100_1001_1001_0001,
            'H' => 0b0000_0011_1100_1100,
            'h' => 0b0100_0001_1100_0000,
            'I' => 0b0100_1000_0011_0011,
            'i' => 0b0100_0000_0000_0000,
            'J' => 0b0000_0000_0111_1100,
            'j' => 0b0100_1000_0101_0000,
            'K' => 0b0011_0001_1100_0000,
            'k' => 0b0111_1000_0000_0000,
            'L' => 0b0000_0000_1111_0000,
            'l' | '|' => 0b0100_1000_0000_0000,
            'M' => 0b0001_0100_1100_1100,
            'm' => 0b0100_0011_0100_1000,
            'N' => 0b0010_0100_1100_1100,
            'n' => 0b0100_0001_0100_0000,
            'O' => 0b0000_0000_1111_1111,
            'o' => 0b0100_0001_0101_0000,
            'P' => 0b0000_0011_1100_0111,
            'p' => 0b0000_1001_1100_0001,
            'Q' => 0b0010_0000_1111_1111,
            'q' => 0b0100_1001_1000_0001,
            'R' => 0b0010_0011_1100_0111,
            'r' => 0b0000_0001_0100_0000,
            'S' | '5' => 0b0000_0011_1011_1011,
            's' => 0b0100_0001_1001_0001,
            'T' => 0b0100_1000_0000_0011,
            't' | '+' => 0b0100_1011_0000_0000,
            'U' => 0b0000_0000_1111_1100,
            'u' => 0b0100_0000_0101_0000,
            'V' => 0b1001_0000_1100_0000,
            'v' => 0b1000_0000_0100_0000,
            'W' => 0b1010_0000_1100_1100,
            'w' => 0b1010_0000_0100_1000,
            'X' | 'x' => 0b1011_0100_0000_0000,
            'Y' => 0b0100_0011_1000_0100,
            'y' => 0b0101_0100_0000_0000,
            'Z' => 0b1001_0000_0011_0011,
            'z' => 0b1000_0001_0001_0000,
            '0' => 0b1001_0000_1111_1111,
            '1' => 0b0001_0000_0000_1100,
            '2' => 0b0000_0011_0111_0111,
            '3' => 0b0000_0010_0011_1111,
            '4' => 0b0000_0011_1000_1100,
            '6' => 0b0000_0011_1111_1001,
            '7' => 0b0000_0000_0000_1111,
            '8' => 0b0000_0011_1111_1111,
            '9' => 0b0000_0011_1010_1111,
            '=' => 0b0000_0011_0011_0000,
            '*' => 0b1111_1111_0000_0000,
            '-' => 0b0000_0011_0000_0000,
            '.' => Self::DECIMAL,
            '\\' => 0b0010_0100_0000_0000,
            '/' => 0b1001_0000_0000_0000,
            '_' => 0b0000_0000_0011_0000,
            '?' => Self::DECIMAL | 0b0100_0010_0000_0111,
            '!' => Self::DECIMAL | 0b0000_0000_0000_1100,
            '(' | '[' => 0b0100_1000_0010_0010,
            ')' | ']' => 0b0100_1000_0001_0001,
            '<' => 0b0011_0000_0000_0000,
            '>' => 0b1000_0100_0000_0000,
            '{' => 0b0100_1001_0010_0010,
            '}' => 0b0100_1010_0001_0001,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Seg7, Seg16, blank, encode};
    use crate::SegmentCount;

    #[test]
    fn seven_segment_hex_letters_ignore_case() {
        for (upper, lower) in ('A'..='F').zip('a'..='f') {
            assert_eq!(Seg7::encode(upper), Seg7::encode(lower));
        }
        assert_eq!(Seg7::encode('b'), 0b111_1100);
    }

    #[test]
    fn table_ranges_end_at_their_edges() {
        assert_eq!(Seg7::encode('0'), Seg7::DIGITS[0]);
        assert_eq!(Seg7::encode('9'), Seg7::DIGITS[9]);
        assert_eq!(Seg7::encode('F'), Seg7::HEX_LETTERS[5]);
        assert_eq!(Seg7::encode('f'), Seg7::HEX_LETTERS[5]);
        for neighbor in ['/', ':', '@', 'G', '`', 'g'] {
            assert_eq!(Seg7::encode(neighbor), Seg7::UNKNOWN, "{neighbor:?}");
        }
    }

    #[test]
    fn unknown_glyph_is_a_low_box() {
        assert_eq!(Seg7::UNKNOWN, 0b001_1100);
        assert_eq!(Seg7::encode('?'), Seg7::UNKNOWN);
    }

    #[test]
    fn extension_bit_patterns_span_seventeen_bits() {
        assert_eq!(Seg16::encode('.'), 0b1_0000_0000_0000_0000);
        assert_eq!(Seg16::encode('?'), 0b1_0100_0010_0000_0111);
        assert_eq!(Seg16::encode('!'), 0b1_0000_0000_0000_1100);
    }

    #[test]
    fn blank_is_dark_in_both_modes() {
        assert_eq!(blank(SegmentCount::Seven), 0);
        assert_eq!(blank(SegmentCount::Sixteen), 0);
        assert_eq!(encode('8', SegmentCount::Seven), 0b111_1111);
    }
}

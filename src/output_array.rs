use embedded_hal::digital::{OutputPin, PinState};
use heapless::Vec;

use crate::Result;
use crate::config::Polarity;
use crate::error::Error::{CannotSetOutputState, PositionOutOfRange};

/// Ordered set of output lines sharing one polarity: the segment bus or the digit enables.
///
/// Filled once when the display is built and never resized. Index *i* is segment *i* (bit *i* of
/// a glyph) or digit position *i*.
pub(crate) struct OutputArray<P, const CAP: usize> {
    pins: Vec<P, CAP>,
    polarity: Polarity,
}

impl<P: OutputPin, const CAP: usize> OutputArray<P, CAP> {
    /// Takes ownership of `pins`. Fails with the number of pins offered if there are more than
    /// `CAP`.
    pub(crate) fn new<I>(pins: I, polarity: Polarity) -> core::result::Result<Self, usize>
    where
        I: IntoIterator<Item = P>,
    {
        let mut offered = pins.into_iter();
        let kept: Vec<P, CAP> = offered.by_ref().take(CAP).collect();
        let extra = offered.count();
        if extra > 0 {
            return Err(kept.len().saturating_add(extra));
        }
        Ok(Self {
            pins: kept,
            polarity,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.pins.len()
    }

    /// Turns line `index` on or off, honoring polarity.
    #[inline]
    pub(crate) fn set_at_index(&mut self, index: usize, on: bool) -> Result<()> {
        let polarity = self.polarity;
        let pin = self.pins.get_mut(index).ok_or(PositionOutOfRange(index))?;
        Self::drive(pin, polarity, on)
    }

    /// Turns every line off.
    #[inline]
    pub(crate) fn set_all_off(&mut self) -> Result<()> {
        let polarity = self.polarity;
        for pin in &mut self.pins {
            Self::drive(pin, polarity, false)?;
        }
        Ok(())
    }

    /// Drives line *i* from bit *i* of `bits`, least significant bit first.
    #[inline]
    pub(crate) fn set_from_bits(&mut self, mut bits: u32) -> Result<()> {
        let polarity = self.polarity;
        for pin in &mut self.pins {
            Self::drive(pin, polarity, (bits & 1) == 1)?;
            bits >>= 1;
        }
        Ok(())
    }

    #[inline]
    fn drive(pin: &mut P, polarity: Polarity, on: bool) -> Result<()> {
        pin.set_state(PinState::from(polarity.level(on)))
            .map_err(|_| CannotSetOutputState)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin};

    use super::OutputArray;
    use crate::config::Polarity;

    #[derive(Default)]
    struct Line(bool);

    impl ErrorType for Line {
        type Error = Infallible;
    }

    impl OutputPin for Line {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0 = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0 = true;
            Ok(())
        }
    }

    fn lines(count: usize) -> impl Iterator<Item = Line> {
        (0..count).map(|_| Line::default())
    }

    #[test]
    fn overflow_reports_every_pin_offered() {
        assert_eq!(
            OutputArray::<Line, 4>::new(lines(9), Polarity::ActiveHigh).err(),
            Some(9)
        );
        assert_eq!(
            OutputArray::<Line, 4>::new(lines(5), Polarity::ActiveHigh).err(),
            Some(5)
        );
        let exact = OutputArray::<Line, 4>::new(lines(4), Polarity::ActiveHigh);
        assert_eq!(exact.map(|array| array.len()).ok(), Some(4));
    }

    #[test]
    fn bits_drive_lines_through_polarity() {
        let Ok(mut array) = OutputArray::<Line, 4>::new(lines(4), Polarity::ActiveLow) else {
            panic!("four lines fit");
        };
        array.set_from_bits(0b0101).expect("infallible pins");
        let levels: Vec<bool> = array.pins.iter().map(|line| line.0).collect();
        assert_eq!(levels, [false, true, false, true]);
        array.set_all_off().expect("infallible pins");
        assert!(array.pins.iter().all(|line| line.0));
    }
}

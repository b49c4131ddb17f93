//! The multiplexing scan.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use super::SegDisplay;
use crate::Result;
use crate::error::Error;

impl<S: OutputPin, D: OutputPin> SegDisplay<S, D> {
    /// Body of the refresh task: lights one digit at a time, left to right, for the refresh
    /// interval each, until [`SegDisplay::stop`] is called.
    ///
    /// A stop request is only checked after a full pass over the digits, so stopping takes at
    /// most one pass (`digit_count` refresh intervals) and never interrupts a pass halfway. On
    /// the way out every digit is deselected.
    ///
    /// Pass `embassy_time::Delay` as `delay` on hardware.
    ///
    /// # Errors
    ///
    /// [`Error::NotRunning`] if scanning was not started with [`SegDisplay::run`], or
    /// [`Error::CannotSetOutputState`] if a line fails; the activity is stopped either way.
    pub async fn refresh_loop(&self, mut delay: impl DelayNs) -> Result<()> {
        if self.refresh_state.is_stopped() {
            return Err(Error::NotRunning);
        }

        let scanned = self.scan_until_stopped(&mut delay).await;
        let deselected = self
            .scan
            .lock(|cell| cell.borrow_mut().digits.set_all_off());
        self.refresh_state.finish();

        #[cfg(feature = "defmt")]
        {
            if let Err(err) = scanned {
                defmt::error!("segdisp: refresh ended: {}", err);
            }
        }
        scanned.and(deselected)
    }

    async fn scan_until_stopped(&self, delay: &mut impl DelayNs) -> Result<()> {
        let interval_us = u32::try_from(self.refresh_interval.as_micros()).unwrap_or(u32::MAX);
        loop {
            for position in 0..self.digit_count {
                self.scan
                    .lock(|cell| cell.borrow_mut().show_digit(position))?;
                delay.delay_us(interval_us).await;
            }
            if self.refresh_state.should_stop() {
                return Ok(());
            }
        }
    }
}

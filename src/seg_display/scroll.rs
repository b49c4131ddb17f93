use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use super::SegDisplay;
use crate::Result;
use crate::error::Error;

impl<S: OutputPin, D: OutputPin> SegDisplay<S, D> {
    /// Body of the scroll task: every [`ScrollConfig::delay`](crate::ScrollConfig), shifts the
    /// text by [`ScrollConfig::step`](crate::ScrollConfig), until [`SegDisplay::scroll_stop`] is
    /// called.
    ///
    /// The stop request is checked right after each delay, so a stop takes effect when the
    /// delay in progress runs out, and no shift happens after it.
    ///
    /// # Errors
    ///
    /// [`Error::ScrollNotConfigured`] without a scroll configuration, [`Error::NotRunning`] if
    /// scrolling was not started with [`SegDisplay::scroll_run`].
    pub async fn scroll_loop(&self, mut delay: impl DelayNs) -> Result<()> {
        let scroll = self.scroll.ok_or(Error::ScrollNotConfigured)?;
        if self.scroll_state.is_stopped() {
            return Err(Error::NotRunning);
        }

        let delay_ms = u32::try_from(scroll.delay.as_millis()).unwrap_or(u32::MAX);
        loop {
            delay.delay_ms(delay_ms).await;
            if self.scroll_state.should_stop() {
                break;
            }
            self.shift_text(scroll.step);
        }
        self.scroll_state.finish();
        Ok(())
    }
}

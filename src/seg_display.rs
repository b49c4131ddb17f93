//! A device abstraction for multiplexed 7- and 16-segment displays.
//!
//! All digits share one bus of segment lines; each digit has its own common-electrode (enable)
//! line. [`SegDisplay`] keeps the text, turns it into per-digit segment patterns, and, through
//! two background activities, scans the digits and scrolls the text.
//!
//! See [`SegDisplay`] for the main device abstraction and usage examples.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::Result;
use crate::config::{
    DisplayConfig, DisplayMode, MAX_DIGITS, MAX_SEGMENT_PINS, ScrollConfig, TEXT_CAPACITY,
};
use crate::error::Error;
use crate::frame::FrameBuffer;
use crate::output_array::OutputArray;
use crate::scheduler::{Activity, Priority, Scheduler};
use crate::task_state::TaskState;
use crate::text_buffer::TextBuffer;

mod refresh;
mod scroll;

/// Characters of the text that land on the digits, leftmost first.
type Visible = Vec<char, MAX_DIGITS>;

// ============================================================================
// Scan state (guarded by the frame lock)
// ============================================================================

/// The frame and the lines it is shown on. Only touched under the frame lock.
struct Scan<S, D> {
    frame: FrameBuffer,
    segments: OutputArray<S, MAX_SEGMENT_PINS>,
    digits: OutputArray<D, MAX_DIGITS>,
}

impl<S: OutputPin, D: OutputPin> Scan<S, D> {
    /// Lights digit `position` alone with its pattern from the frame.
    fn show_digit(&mut self, position: usize) -> Result<()> {
        let bits = *self
            .frame_bits(position)
            .ok_or(Error::PositionOutOfRange(position))?;
        self.digits.set_all_off()?;
        self.digits.set_at_index(position, true)?;
        self.segments.set_from_bits(bits)
    }

    fn frame_bits(&self, position: usize) -> Option<&u32> {
        (position < self.frame.len()).then(|| &self.frame[position])
    }

    fn all_off(&mut self) -> Result<()> {
        self.digits.set_all_off()?;
        self.segments.set_all_off()
    }
}

// ============================================================================
// SegDisplay
// ============================================================================

/// A device abstraction for a multiplexed 7- or 16-segment display.
///
/// # Hardware Requirements
///
/// - One output line per segment, shared by every digit: 7 or 16 lines, optionally followed by
///   one extension line for the decimal point. Line *i* is bit *i* of the glyph tables in
///   [`glyphs`](crate::glyphs).
/// - One enable (common electrode) line per digit, leftmost digit first.
///
/// Line polarities and the segment count are set by [`DisplayMode`].
///
/// # Concurrency
///
/// The display is meant to live in a `static` and be shared by reference between the caller
/// and two background tasks (see [`Scheduler`]). The frame and the text sit behind separate
/// blocking locks; neither is held across an `.await`, and they are never held together.
///
/// # Example
///
/// ```no_run
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, OutputPin};
/// # struct Pin;
/// # impl ErrorType for Pin { type Error = Infallible; }
/// # impl OutputPin for Pin {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// use embassy_time::Duration;
/// use segdisp::{DisplayConfig, DisplayMode, Polarity, ScrollConfig, SegDisplay, SegmentCount};
///
/// let config = DisplayConfig::new(DisplayMode::new(
///     SegmentCount::Seven,
///     Polarity::ActiveLow,  // segments
///     Polarity::ActiveHigh, // digit enables
/// ))
/// .with_scroll(ScrollConfig::new(Duration::from_millis(1000), 1));
///
/// let segments = [Pin, Pin, Pin, Pin, Pin, Pin, Pin];
/// let digits = [Pin, Pin, Pin, Pin];
/// let display = SegDisplay::new(segments, digits, config)?;
///
/// display.set_text("-123- ")?;
/// display.shift(2)?; // "23- -1", showing "23- "
/// # Ok::<(), segdisp::Error>(())
/// ```
pub struct SegDisplay<S, D> {
    mode: DisplayMode,
    digit_count: usize,
    refresh_interval: Duration,
    scroll: Option<ScrollConfig>,
    scan: Mutex<CriticalSectionRawMutex, RefCell<Scan<S, D>>>,
    text: Mutex<CriticalSectionRawMutex, RefCell<TextBuffer>>,
    refresh_state: TaskState,
    scroll_state: TaskState,
}

impl<S: OutputPin, D: OutputPin> SegDisplay<S, D> {
    /// Takes ownership of the lines and switches them all off (every digit deselected, every
    /// segment dark).
    ///
    /// # Errors
    ///
    /// [`Error::SegmentPinCount`] if the segment lines do not match the mode,
    /// [`Error::DigitPinCount`] if there are no digit lines or more than
    /// [`MAX_DIGITS`], and [`Error::CannotSetOutputState`] if a line refuses its initial level.
    pub fn new<SI, DI>(segment_pins: SI, digit_pins: DI, config: DisplayConfig) -> Result<Self>
    where
        SI: IntoIterator<Item = S>,
        DI: IntoIterator<Item = D>,
    {
        let mode = config.mode;
        let expected = mode.segment_count.segments();
        let segments = OutputArray::new(segment_pins, mode.segment_polarity)
            .map_err(|actual| Error::SegmentPinCount { expected, actual })?;
        if !mode.segment_count.accepts_pin_count(segments.len()) {
            return Err(Error::SegmentPinCount {
                expected,
                actual: segments.len(),
            });
        }
        let digits =
            OutputArray::new(digit_pins, mode.digit_polarity).map_err(Error::DigitPinCount)?;
        let digit_count = digits.len();
        if digit_count == 0 {
            return Err(Error::DigitPinCount(0));
        }

        let mut scan = Scan {
            frame: FrameBuffer::new(digit_count, mode.segment_count),
            segments,
            digits,
        };
        scan.all_off()?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "segdisp: {} digits, {} segment lines, {}",
            digit_count,
            scan.segments.len(),
            mode
        );

        Ok(Self {
            mode,
            digit_count,
            refresh_interval: config.refresh_interval,
            scroll: config.scroll,
            scan: Mutex::new(RefCell::new(scan)),
            text: Mutex::new(RefCell::new(TextBuffer::default())),
            refresh_state: TaskState::new(),
            scroll_state: TaskState::new(),
        })
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// Replaces the text and shows it from its first character.
    ///
    /// Text shorter than the display leaves the remaining digits dark.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyText`] for `""` and [`Error::TextTooLong`] past
    /// [`TEXT_CAPACITY`] characters; the previous text stays on the display.
    pub fn set_text(&self, text: &str) -> Result<()> {
        let visible = self.text.lock(|cell| {
            let mut buffer = cell.borrow_mut();
            buffer.set(text)?;
            Ok::<_, Error>(self.visible(&buffer))
        })?;
        self.render(&visible);

        #[cfg(feature = "defmt")]
        defmt::debug!("segdisp: text set ({} chars)", text.chars().count());
        Ok(())
    }

    /// Shows `character` at digit `position` (0 is leftmost) without touching the text.
    ///
    /// The next text change (including a scroll tick) redraws every position from the text.
    ///
    /// # Errors
    ///
    /// [`Error::PositionOutOfRange`] if `position` is not below [`SegDisplay::digit_count`].
    pub fn set(&self, position: usize, character: char) -> Result<()> {
        self.scan
            .lock(|cell| cell.borrow_mut().frame.set(position, character))
    }

    /// Scrolls by `step` characters: left for positive steps, right for negative ones. Steps
    /// wrap around the text.
    ///
    /// # Errors
    ///
    /// [`Error::ScrollNotConfigured`] if the display was built without a [`ScrollConfig`].
    pub fn shift(&self, step: i32) -> Result<()> {
        self.scroll.ok_or(Error::ScrollNotConfigured)?;
        self.shift_text(step);
        Ok(())
    }

    /// Scrolls so that character `target` of the text, as it was set, is the leftmost digit.
    /// `target` wraps around the text; `move_absolute(0)` restores the unscrolled text.
    ///
    /// # Errors
    ///
    /// [`Error::ScrollNotConfigured`] if the display was built without a [`ScrollConfig`].
    pub fn move_absolute(&self, target: i32) -> Result<()> {
        self.scroll.ok_or(Error::ScrollNotConfigured)?;
        let visible = self.text.lock(|cell| {
            let mut buffer = cell.borrow_mut();
            buffer.move_to(target);
            self.visible(&buffer)
        });
        self.render(&visible);
        Ok(())
    }

    /// The shift shared by [`SegDisplay::shift`] and the scroll activity.
    fn shift_text(&self, step: i32) {
        // The text lock is released before the frame lock is taken.
        let visible = self.text.lock(|cell| {
            let mut buffer = cell.borrow_mut();
            buffer.shift(step);
            self.visible(&buffer)
        });
        self.render(&visible);
    }

    fn visible(&self, buffer: &TextBuffer) -> Visible {
        (0..self.digit_count)
            .map_while(|position| buffer.get(position))
            .collect()
    }

    fn render(&self, visible: &[char]) {
        self.scan.lock(|cell| cell.borrow_mut().frame.render(visible));
    }

    // ------------------------------------------------------------------------
    // Activities
    // ------------------------------------------------------------------------

    /// Starts multiplexed scanning: asks `scheduler` for a task that awaits
    /// [`SegDisplay::refresh_loop`].
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyRunning`] if scanning was started and not stopped, or the scheduler's
    /// error if it could not start the task.
    pub fn run(&self, scheduler: &impl Scheduler, priority: Priority) -> Result<()> {
        Self::start(&self.refresh_state, scheduler, Activity::Refresh, priority)
    }

    /// Blanks the display, then stops scanning.
    ///
    /// Resolves once the refresh task has finished its current pass and deselected every digit.
    ///
    /// # Errors
    ///
    /// [`Error::NotRunning`] if scanning is not running.
    pub async fn stop(&self) -> Result<()> {
        if !self.refresh_state.is_running() {
            return Err(Error::NotRunning);
        }
        self.set_text(" ")?;
        self.refresh_state.request_stop()?;
        self.refresh_state.wait_stopped().await;

        #[cfg(feature = "defmt")]
        defmt::info!("segdisp: refresh stopped");
        Ok(())
    }

    /// Starts automatic scrolling: asks `scheduler` for a task that awaits
    /// [`SegDisplay::scroll_loop`].
    ///
    /// # Errors
    ///
    /// [`Error::ScrollNotConfigured`] without a [`ScrollConfig`], [`Error::AlreadyRunning`] if
    /// scrolling was started and not stopped, or the scheduler's error.
    pub fn scroll_run(&self, scheduler: &impl Scheduler, priority: Priority) -> Result<()> {
        self.scroll.ok_or(Error::ScrollNotConfigured)?;
        Self::start(&self.scroll_state, scheduler, Activity::Scroll, priority)
    }

    /// Stops automatic scrolling. The text stays where it is.
    ///
    /// Resolves once the scroll task has noticed, which is after its current delay elapses.
    ///
    /// # Errors
    ///
    /// [`Error::NotRunning`] if scrolling is not running.
    pub async fn scroll_stop(&self) -> Result<()> {
        self.scroll_state.request_stop()?;
        self.scroll_state.wait_stopped().await;

        #[cfg(feature = "defmt")]
        defmt::info!("segdisp: scroll stopped");
        Ok(())
    }

    fn start(
        state: &TaskState,
        scheduler: &impl Scheduler,
        activity: Activity,
        priority: Priority,
    ) -> Result<()> {
        state.claim()?;
        if let Err(err) = scheduler.start(activity, priority) {
            state.release();
            return Err(err);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("segdisp: {} started at priority {}", activity, priority);
        Ok(())
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl<S, D> SegDisplay<S, D> {
    /// The segment pattern currently assigned to each digit, leftmost first.
    #[must_use]
    pub fn frame(&self) -> Vec<u32, MAX_DIGITS> {
        self.scan.lock(|cell| cell.borrow().frame.to_vec())
    }

    /// The whole text as currently rotated; its first characters are on the display.
    #[must_use]
    pub fn text(&self) -> Vec<char, TEXT_CAPACITY> {
        self.text
            .lock(|cell| Vec::from_slice(cell.borrow().as_slice()).unwrap_or_default())
    }

    /// How far the text has scrolled from the way it was set, in `0..text length`.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.text.lock(|cell| cell.borrow().offset())
    }

    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub const fn scroll_config(&self) -> Option<ScrollConfig> {
        self.scroll
    }

    /// Whether scanning is started (including a stop still in progress).
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.refresh_state.is_stopped()
    }

    /// Whether scrolling is started (including a stop still in progress).
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        !self.scroll_state.is_stopped()
    }
}

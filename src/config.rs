//! Construction-time configuration for [`SegDisplay`](crate::SegDisplay).
//!
//! Nothing here can change once the display is built.

use embassy_time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// The largest number of digits (common electrodes) a display may have.
pub const MAX_DIGITS: usize = 16;

/// The largest number of segment lines: sixteen strokes plus one extension (decimal point) line.
pub const MAX_SEGMENT_PINS: usize = 17;

/// The longest text [`SegDisplay::set_text`](crate::SegDisplay::set_text) accepts, in characters.
pub const TEXT_CAPACITY: usize = 64;

/// Time each digit stays lit before the scan moves on.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_micros(5000);

// ============================================================================
// Display mode
// ============================================================================

/// Which output level means "on" for a group of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Returns the pin state (`true` = high) that expresses `on` under this polarity.
    #[must_use]
    pub const fn level(self, on: bool) -> bool {
        match self {
            Self::ActiveHigh => on,
            Self::ActiveLow => !on,
        }
    }
}

/// Number of strokes per digit, which also selects the glyph alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentCount {
    #[default]
    Seven,
    Sixteen,
}

impl SegmentCount {
    /// Number of semantic segments (not counting the extension line).
    #[must_use]
    pub const fn segments(self) -> usize {
        match self {
            Self::Seven => 7,
            Self::Sixteen => 16,
        }
    }

    /// Whether `pin_count` segment pins fit this mode: the semantic segments, optionally
    /// followed by one extension (decimal point) line.
    #[must_use]
    pub const fn accepts_pin_count(self, pin_count: usize) -> bool {
        matches!(pin_count.checked_sub(self.segments()), Some(0 | 1))
    }
}

/// Wiring of a display: segment polarity, digit-enable polarity, and segment count.
///
/// A common-cathode display driven straight from GPIO is usually
/// `segment_polarity: ActiveHigh, digit_polarity: ActiveLow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMode {
    pub segment_count: SegmentCount,
    pub segment_polarity: Polarity,
    pub digit_polarity: Polarity,
}

impl DisplayMode {
    #[must_use]
    pub const fn new(
        segment_count: SegmentCount,
        segment_polarity: Polarity,
        digit_polarity: Polarity,
    ) -> Self {
        Self {
            segment_count,
            segment_polarity,
            digit_polarity,
        }
    }
}

// ============================================================================
// Scrolling
// ============================================================================

/// Automatic scrolling: move `step` characters every `delay`.
///
/// Positive steps move the text left, negative steps move it right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    pub delay: Duration,
    pub step: i32,
}

impl ScrollConfig {
    #[must_use]
    pub const fn new(delay: Duration, step: i32) -> Self {
        Self { delay, step }
    }
}

// ============================================================================
// DisplayConfig
// ============================================================================

/// Everything [`SegDisplay::new`](crate::SegDisplay::new) needs besides the pins.
///
/// ```
/// use embassy_time::Duration;
/// use segdisp::{DisplayConfig, DisplayMode, Polarity, ScrollConfig, SegmentCount};
///
/// let config = DisplayConfig::new(DisplayMode::new(
///     SegmentCount::Seven,
///     Polarity::ActiveLow,
///     Polarity::ActiveHigh,
/// ))
/// .with_refresh_interval(Duration::from_micros(2500))
/// .with_scroll(ScrollConfig::new(Duration::from_millis(1000), 1));
///
/// assert!(config.scroll.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    pub refresh_interval: Duration,
    pub scroll: Option<ScrollConfig>,
}

impl DisplayConfig {
    /// A configuration with the default refresh interval and no scrolling.
    #[must_use]
    pub const fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            scroll: None,
        }
    }

    #[must_use]
    pub const fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    #[must_use]
    pub const fn with_scroll(mut self, scroll: ScrollConfig) -> Self {
        self.scroll = Some(scroll);
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

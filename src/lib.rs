//! Driver for multiplexed 7- and 16-segment displays.
//!
//! Digits share one bus of segment lines and are selected one at a time through their common
//! electrodes. [`SegDisplay`] encodes text into segment patterns, scans the digits fast enough
//! to look steady, and scrolls the text.
//!
//! Lines are any [`embedded_hal::digital::OutputPin`]; sleeping goes through
//! [`embedded_hal_async::delay::DelayNs`]; tasks are started through a [`Scheduler`] the
//! application provides.
//!
//! # Features
//!
//! - **`defmt`**: lifecycle logging and `defmt::Format` for the public types.
//! - **`executor`**: `From<embassy_executor::SpawnError>` for [`Error`].
//! - **`pico1`**: builds the RP2040 demo in `demos/`.
#![cfg_attr(not(test), no_std)]

mod config;
mod error;
mod frame;
pub mod glyphs;
mod output_array;
mod scheduler;
mod seg_display;
mod task_state;
mod text_buffer;

// Re-export commonly used items
pub use config::{
    DEFAULT_REFRESH_INTERVAL, DisplayConfig, DisplayMode, MAX_DIGITS, MAX_SEGMENT_PINS,
    Polarity, ScrollConfig, SegmentCount, TEXT_CAPACITY,
};
pub use error::{Error, ErrorKind, Result};
pub use scheduler::{Activity, Priority, Scheduler};
pub use seg_display::SegDisplay;

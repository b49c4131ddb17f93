//! Host stand-ins for the display's collaborators: output lines, the delay, and the scheduler.
#![allow(dead_code, reason = "Each test file uses a different subset")]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use segdisp::{Activity, DisplayConfig, Error, Priority, Result, Scheduler, SegDisplay};

/// A bank of output lines; each [`LinePin`] drives one of them.
#[derive(Clone)]
pub struct Lines(Rc<RefCell<Vec<bool>>>);

impl Lines {
    /// `count` lines, all starting at an arbitrary "unknown" high level.
    pub fn new(count: usize) -> Self {
        Self(Rc::new(RefCell::new(vec![true; count])))
    }

    pub fn pins(&self) -> Vec<LinePin> {
        (0..self.0.borrow().len())
            .map(|index| LinePin {
                lines: self.clone(),
                index,
            })
            .collect()
    }

    pub fn levels(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }
}

pub struct LinePin {
    lines: Lines,
    index: usize,
}

impl ErrorType for LinePin {
    type Error = Infallible;
}

impl OutputPin for LinePin {
    fn set_low(&mut self) -> core::result::Result<(), Infallible> {
        self.lines.0.borrow_mut()[self.index] = false;
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Infallible> {
        self.lines.0.borrow_mut()[self.index] = true;
        Ok(())
    }
}

pub type TestDisplay = SegDisplay<LinePin, LinePin>;

pub fn display(segment_count: usize, digit_count: usize, config: DisplayConfig) -> (TestDisplay, Lines, Lines) {
    let segments = Lines::new(segment_count);
    let digits = Lines::new(digit_count);
    let display = SegDisplay::new(segments.pins(), digits.pins(), config).expect("valid wiring");
    (display, segments, digits)
}

/// Line levels seen while a delay was in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub segments: Vec<bool>,
    pub digits: Vec<bool>,
}

/// A delay that returns on the next poll, counting calls and optionally recording the lines.
#[derive(Clone, Default)]
pub struct MockDelay {
    calls: Rc<Cell<usize>>,
    last_ns: Rc<Cell<u64>>,
    probe: Option<(Lines, Lines)>,
    snapshots: Rc<RefCell<Vec<Snapshot>>>,
}

impl MockDelay {
    pub fn probing(segments: &Lines, digits: &Lines) -> Self {
        Self {
            probe: Some((segments.clone(), digits.clone())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_ns(&self) -> u64 {
        self.last_ns.get()
    }

    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.borrow().clone()
    }

    async fn sleep(&mut self, ns: u64) {
        self.calls.set(self.calls.get() + 1);
        self.last_ns.set(ns);
        if let Some((segments, digits)) = &self.probe {
            self.snapshots.borrow_mut().push(Snapshot {
                segments: segments.levels(),
                digits: digits.levels(),
            });
        }
        embassy_futures::yield_now().await;
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.sleep(u64::from(ns)).await;
    }

    async fn delay_us(&mut self, us: u32) {
        self.sleep(u64::from(us) * 1_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.sleep(u64::from(ms) * 1_000_000).await;
    }
}

/// Records start requests instead of spawning; the test awaits the loops itself.
#[derive(Default)]
pub struct MockScheduler {
    pub started: RefCell<Vec<(Activity, Priority)>>,
    pub refuse: Cell<bool>,
}

impl Scheduler for MockScheduler {
    fn start(&self, activity: Activity, priority: Priority) -> Result<()> {
        if self.refuse.get() {
            return Err(Error::TaskSpawn);
        }
        self.started.borrow_mut().push((activity, priority));
        Ok(())
    }
}

/// Waits (by yielding) until `delay` has been called `count` times.
pub async fn until_calls(delay: &MockDelay, count: usize) {
    while delay.calls() < count {
        embassy_futures::yield_now().await;
    }
}

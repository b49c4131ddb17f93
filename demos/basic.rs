//! Scrolls text across a 4-digit, 7-segment display on a Raspberry Pi Pico (RP2040).
//!
//! Wiring: segments A..G on GP0..GP6 (common anode, so active low) and the four digit
//! enables on GP10..GP13 through transistors (active high).
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Delay, Duration, Timer};
use panic_probe as _;
use segdisp::{
    Activity, DisplayConfig, DisplayMode, Polarity, Priority, Result, Scheduler, ScrollConfig,
    SegDisplay, SegmentCount,
};
use static_cell::StaticCell;

type Display = SegDisplay<Output<'static>, Output<'static>>;

static DISPLAY: StaticCell<Display> = StaticCell::new();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let Err(err) = inner_main(spawner).await;
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let segment_pins = [
        Output::new(p.PIN_0, Level::High),
        Output::new(p.PIN_1, Level::High),
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
        Output::new(p.PIN_6, Level::High),
    ];
    let digit_pins = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];

    let config = DisplayConfig::new(DisplayMode::new(
        SegmentCount::Seven,
        Polarity::ActiveLow,
        Polarity::ActiveHigh,
    ))
    .with_scroll(ScrollConfig::new(Duration::from_millis(1000), 1));
    let display: &'static Display =
        DISPLAY.init(SegDisplay::new(segment_pins, digit_pins, config)?);
    let scheduler = AppScheduler { spawner, display };

    display.set_text("-123- ")?;
    display.run(&scheduler, Priority(1))?;
    display.scroll_run(&scheduler, Priority(0))?;
    info!("Scrolling");

    Timer::after_millis(5600).await;
    display.set_text("12345 ")?;
    display.scroll_stop().await?;
    display.shift(2)?;
    info!("Parked on offset {}", display.offset());

    Timer::after_secs(3).await;
    display.stop().await?;
    info!("Display off");

    loop {
        Timer::after_secs(60).await;
    }
}

struct AppScheduler {
    spawner: Spawner,
    display: &'static Display,
}

impl Scheduler for AppScheduler {
    fn start(&self, activity: Activity, _priority: Priority) -> Result<()> {
        // Both tasks share the thread-mode executor, so the hint is not used.
        match activity {
            Activity::Refresh => self.spawner.spawn(refresh_task(self.display)?),
            Activity::Scroll => self.spawner.spawn(scroll_task(self.display)?),
        }
        Ok(())
    }
}

#[embassy_executor::task]
async fn refresh_task(display: &'static Display) {
    if let Err(err) = display.refresh_loop(Delay).await {
        defmt::error!("refresh task ended: {}", err);
    }
}

#[embassy_executor::task]
async fn scroll_task(display: &'static Display) {
    if let Err(err) = display.scroll_loop(Delay).await {
        defmt::error!("scroll task ended: {}", err);
    }
}

//! The host capability that starts a display's background activities.

use crate::Result;

/// A background activity of [`SegDisplay`](crate::SegDisplay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Multiplexed scanning; the task must await
    /// [`SegDisplay::refresh_loop`](crate::SegDisplay::refresh_loop).
    Refresh,
    /// Automatic scrolling; the task must await
    /// [`SegDisplay::scroll_loop`](crate::SegDisplay::scroll_loop).
    Scroll,
}

/// Priority hint for the task running an [`Activity`]. Larger means more urgent.
///
/// The scheduler may map it onto executors of different interrupt priority, or ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Priority(pub u8);

/// Starts tasks on behalf of a display.
///
/// Embassy tasks cannot be generic, so the application writes one thin concrete task per
/// activity and spawns it here:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn refresh_task(display: &'static Display) {
///     if let Err(err) = display.refresh_loop(embassy_time::Delay).await {
///         defmt::panic!("{}", err);
///     }
/// }
///
/// struct AppScheduler {
///     spawner: Spawner,
///     display: &'static Display,
/// }
///
/// impl Scheduler for AppScheduler {
///     fn start(&self, activity: Activity, _priority: Priority) -> segdisp::Result<()> {
///         match activity {
///             Activity::Refresh => self.spawner.spawn(refresh_task(self.display)?),
///             Activity::Scroll => self.spawner.spawn(scroll_task(self.display)?),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Scheduler {
    /// Starts a task for `activity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`](crate::Error::TaskSpawn) (or any other error) if no task
    /// could be started; the display then stays stopped.
    fn start(&self, activity: Activity, priority: Priority) -> Result<()>;
}

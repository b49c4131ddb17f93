use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use portable_atomic::{AtomicU8, Ordering};

use crate::Result;
use crate::error::Error;

const STOPPED: u8 = 0;
const RUNNING: u8 = 1;
const STOPPING: u8 = 2;

/// Lifecycle of one background activity: `Stopped -> Running -> Stopping -> Stopped`.
///
/// The facade claims the latch before asking the scheduler for a task, the task's loop polls
/// [`TaskState::should_stop`] at its cancellation points, and [`TaskState::finish`] wakes whoever
/// is waiting in [`TaskState::wait_stopped`].
pub(crate) struct TaskState {
    state: AtomicU8,
    exited: Signal<CriticalSectionRawMutex, ()>,
}

impl TaskState {
    pub(crate) const fn new() -> Self {
        Self {
            state: AtomicU8::new(STOPPED),
            exited: Signal::new(),
        }
    }

    /// Moves `Stopped -> Running`.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyRunning`] if the activity is running or still stopping.
    pub(crate) fn claim(&self) -> Result<()> {
        self.state
            .compare_exchange(STOPPED, RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::AlreadyRunning)?;
        self.exited.reset();
        Ok(())
    }

    /// Undoes [`TaskState::claim`] when no task was started.
    pub(crate) fn release(&self) {
        self.state.store(STOPPED, Ordering::Release);
    }

    /// Moves `Running -> Stopping`.
    ///
    /// # Errors
    ///
    /// [`Error::NotRunning`] if there is nothing to stop.
    pub(crate) fn request_stop(&self) -> Result<()> {
        self.state
            .compare_exchange(RUNNING, STOPPING, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| Error::NotRunning)
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state.load(Ordering::Acquire) == RUNNING
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.state.load(Ordering::Acquire) == STOPPED
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.state.load(Ordering::Acquire) == STOPPING
    }

    /// Marks the activity stopped and wakes [`TaskState::wait_stopped`].
    ///
    /// Both happen in one critical section, so a new run cannot be claimed in between and have
    /// its own stop released by this signal.
    pub(crate) fn finish(&self) {
        critical_section::with(|_| {
            self.state.store(STOPPED, Ordering::Release);
            self.exited.signal(());
        });
    }

    pub(crate) async fn wait_stopped(&self) {
        self.exited.wait().await;
    }
}

#[cfg(test)]
mod tests {
    use core::pin::pin;
    use core::task::Poll;

    use embassy_futures::poll_once;

    use super::TaskState;
    use crate::error::Error;

    #[test]
    fn claim_is_exclusive_until_finished() {
        let state = TaskState::new();
        assert_eq!(state.claim(), Ok(()));
        assert_eq!(state.claim(), Err(Error::AlreadyRunning));
        assert_eq!(state.request_stop(), Ok(()));
        assert!(state.should_stop());
        assert_eq!(state.claim(), Err(Error::AlreadyRunning));
        state.finish();
        assert!(state.is_stopped());
        assert_eq!(state.claim(), Ok(()));
    }

    #[test]
    fn earlier_finish_does_not_release_a_later_stop() {
        let state = TaskState::new();
        state.claim().expect("stopped");
        state.request_stop().expect("running");
        // Nobody waits for this run to finish.
        state.finish();

        state.claim().expect("stopped");
        state.request_stop().expect("running");
        let mut wait = pin!(state.wait_stopped());
        assert_eq!(poll_once(wait.as_mut()), Poll::Pending);
        state.finish();
        assert_eq!(poll_once(wait.as_mut()), Poll::Ready(()));
        assert!(state.is_stopped());
    }

    #[test]
    fn stop_requires_running() {
        let state = TaskState::new();
        assert_eq!(state.request_stop(), Err(Error::NotRunning));
        state.claim().expect("stopped");
        state.release();
        assert_eq!(state.request_stop(), Err(Error::NotRunning));
    }
}

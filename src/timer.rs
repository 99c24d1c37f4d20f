// SPDX-License-Identifier: MPL-2.0
//! Pausable countdown driving a toast's auto-dismiss.
//!
//! A [`Timer`] fires its callback once after the remaining time runs out and
//! publishes a 0–100 progress value (percent of time left) that ticks down
//! alongside. `stop` pauses without losing elapsed time, `start` resumes,
//! `clear` cancels outright. Dropping the timer clears it.
//!
//! The owning toast record keeps the [`Timer`]; renderers get a
//! [`TimerControl`] for pause-on-hover, which goes inert once the timer is
//! dropped.

use crate::config::defaults::{FULL_PROGRESS, MIN_PROGRESS_TICK};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};

/// Invoked once when the countdown expires.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
struct TimerState {
    remaining: Duration,
    /// Set while armed; elapsed time is measured from here on `stop`.
    started_at: Option<Instant>,
    countdown: Option<JoinHandle<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl TimerState {
    fn cancel_tasks(&mut self) {
        if let Some(task) = self.countdown.take() {
            task.abort();
        }
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
    }
}

struct Shared {
    state: Mutex<TimerState>,
    progress: watch::Sender<u8>,
    callback: Callback,
    runtime: Handle,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, TimerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start(self: &Arc<Self>) {
        let now = Instant::now();
        let mut state = self.state();
        state.cancel_tasks();
        state.started_at = Some(now);

        let remaining = state.remaining;
        let weak = Arc::downgrade(self);
        state.countdown = Some(self.runtime.spawn(countdown(weak, now + remaining)));

        let progress = *self.progress.borrow();
        if progress > 0 {
            let period = tick_period(remaining, progress);
            state.ticker = Some(self.runtime.spawn(ticker(Arc::downgrade(self), now, period)));
        }
        tracing::trace!(remaining_ms = remaining.as_millis(), progress, "timer armed");
    }

    fn stop(&self) {
        let mut state = self.state();
        state.cancel_tasks();
        if let Some(started_at) = state.started_at.take() {
            let elapsed = Instant::now().saturating_duration_since(started_at);
            state.remaining = state.remaining.saturating_sub(elapsed);
            tracing::trace!(remaining_ms = state.remaining.as_millis(), "timer paused");
        }
    }

    fn clear(&self) {
        let mut state = self.state();
        state.cancel_tasks();
        state.started_at = None;
    }
}

/// Interval between progress decrements: the remaining time spread over the
/// remaining percent.
fn tick_period(remaining: Duration, progress: u8) -> Duration {
    if remaining.is_zero() {
        return MIN_PROGRESS_TICK;
    }
    (remaining / u32::from(progress.max(1))).max(Duration::from_millis(1))
}

async fn countdown(shared: Weak<Shared>, deadline: Instant) {
    sleep_until(deadline).await;
    let Some(shared) = shared.upgrade() else {
        return;
    };
    {
        let mut state = shared.state();
        state.countdown = None;
        state.started_at = None;
        state.remaining = Duration::ZERO;
    }
    let callback = Arc::clone(&shared.callback);
    drop(shared);
    callback();
}

async fn ticker(shared: Weak<Shared>, start: Instant, period: Duration) {
    let mut interval = interval_at(start + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
    loop {
        interval.tick().await;
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let mut exhausted = false;
        shared.progress.send_modify(|progress| {
            *progress = progress.saturating_sub(1);
            exhausted = *progress == 0;
        });
        if exhausted {
            return;
        }
    }
}

/// Pausable countdown with a progress value.
pub struct Timer {
    shared: Arc<Shared>,
}

impl Timer {
    /// Creates an idle timer for `delay`; call [`Timer::start`] to arm it.
    ///
    /// Tasks are spawned on `runtime`.
    pub fn new(runtime: Handle, delay: Duration, callback: Callback) -> Self {
        Self::build(runtime, delay, FULL_PROGRESS, callback)
    }

    /// Creates a timer whose countdown conceptually began at `created_at`.
    ///
    /// Remaining time and progress are reduced by the time already elapsed,
    /// never going below zero.
    pub fn since(runtime: Handle, delay: Duration, created_at: Instant, callback: Callback) -> Self {
        if delay.is_zero() {
            return Self::new(runtime, delay, callback);
        }
        let elapsed = Instant::now().saturating_duration_since(created_at);
        let remaining = delay.saturating_sub(elapsed);
        let left = 100.0 - (elapsed.as_secs_f64() / delay.as_secs_f64()) * 100.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let progress = left.clamp(0.0, 100.0).round() as u8;
        Self::build(runtime, remaining, progress, callback)
    }

    fn build(runtime: Handle, remaining: Duration, progress: u8, callback: Callback) -> Self {
        let (progress, _) = watch::channel(progress);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(TimerState {
                    remaining,
                    started_at: None,
                    countdown: None,
                    ticker: None,
                }),
                progress,
                callback,
                runtime,
            }),
        }
    }

    /// Arms the countdown and progress ticker, replacing any armed ones.
    pub fn start(&self) {
        self.shared.start();
    }

    /// Pauses, keeping the remaining time for a later [`Timer::start`].
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Cancels without adjusting the remaining time.
    pub fn clear(&self) {
        self.shared.clear();
    }

    /// Percent of time remaining, 0–100.
    #[must_use]
    pub fn progress(&self) -> u8 {
        *self.shared.progress.borrow()
    }

    /// Receiver notified on every progress tick.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.shared.progress.subscribe()
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.shared.state().remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.state().started_at.is_some()
    }

    /// Weak control handle for renderers.
    #[must_use]
    pub fn control(&self) -> TimerControl {
        TimerControl {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.shared.clear();
    }
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("remaining", &self.remaining())
            .field("progress", &self.progress())
            .field("running", &self.is_running())
            .finish()
    }
}

/// Renderer-side handle to a toast's timer.
///
/// Every method is a no-op once the owning toast has been unmounted.
#[derive(Clone, Debug, Default)]
pub struct TimerControl {
    shared: Weak<Shared>,
}

impl TimerControl {
    /// Resumes the countdown (hover leave).
    pub fn start(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.start();
        }
    }

    /// Pauses the countdown (hover enter).
    pub fn stop(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.stop();
        }
    }

    /// Last published progress, `None` once the timer is gone.
    #[must_use]
    pub fn progress(&self) -> Option<u8> {
        self.shared.upgrade().map(|shared| *shared.progress.borrow())
    }

    #[must_use]
    pub fn subscribe(&self) -> Option<watch::Receiver<u8>> {
        self.shared.upgrade().map(|shared| shared.progress.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::settle;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;

    fn counting() -> (Arc<AtomicUsize>, Callback) {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&count);
        (
            count,
            Arc::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    async fn advance_ms(ms: u64) {
        advance(Duration::from_millis(ms)).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_at_deadline() {
        let (count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        timer.start();

        advance_ms(299).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        advance_ms(1).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        advance_ms(1000).await;
        assert_eq!(count.load(Ordering::SeqCst), 1, "callback fired twice");
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_pauses_and_start_resumes_remaining_time() {
        let (count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        timer.start();

        advance_ms(200).await;
        timer.stop();
        assert_eq!(timer.remaining(), Duration::from_millis(100));

        advance_ms(1000).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        timer.start();
        advance_ms(99).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        advance_ms(1).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_without_start_keeps_remaining_time() {
        let (_count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        advance_ms(50).await;
        timer.stop();
        assert_eq!(timer.remaining(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_cancels_previous_firing() {
        let (count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        timer.start();
        advance_ms(100).await;
        timer.start();

        advance_ms(250).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        advance_ms(50).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_without_adjusting_remaining() {
        let (count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        timer.start();
        advance_ms(100).await;
        timer.clear();

        advance_ms(1000).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(timer.remaining(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn progress_ticks_down_with_time() {
        let (_count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(1000), callback);
        assert_eq!(timer.progress(), 100);
        timer.start();

        advance_ms(500).await;
        let halfway = timer.progress();
        assert!((49..=51).contains(&halfway), "progress was {halfway}");

        advance_ms(500).await;
        assert_eq!(timer.progress(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn since_back_computes_elapsed_time() {
        let (count, callback) = counting();
        let created_at = Instant::now();
        advance_ms(250).await;

        let timer = Timer::since(
            Handle::current(),
            Duration::from_millis(1000),
            created_at,
            callback,
        );
        assert_eq!(timer.remaining(), Duration::from_millis(750));
        assert_eq!(timer.progress(), 75);

        timer.start();
        advance_ms(750).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn since_floors_at_zero_when_already_expired() {
        let (count, callback) = counting();
        let created_at = Instant::now();
        advance_ms(5000).await;

        let timer = Timer::since(
            Handle::current(),
            Duration::from_millis(1000),
            created_at,
            callback,
        );
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert_eq!(timer.progress(), 0);

        timer.start();
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_cancels_and_disarms_control() {
        let (count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        let control = timer.control();
        timer.start();
        drop(timer);

        advance_ms(1000).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(control.progress().is_none());
        control.start();
        advance_ms(1000).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn control_pauses_like_hover() {
        let (count, callback) = counting();
        let timer = Timer::new(Handle::current(), Duration::from_millis(300), callback);
        let control = timer.control();
        timer.start();

        advance_ms(100).await;
        control.stop();
        advance_ms(500).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        control.start();
        advance_ms(200).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn tick_period_spreads_remaining_over_progress() {
        assert_eq!(
            tick_period(Duration::from_millis(3000), 100),
            Duration::from_millis(30)
        );
        assert_eq!(tick_period(Duration::ZERO, 100), MIN_PROGRESS_TICK);
    }
}

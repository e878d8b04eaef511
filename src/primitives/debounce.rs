use std::time::Duration;

use gpui::{App, Context, Task, Window};

/// A timer that coalesces bursts of calls into one.
///
/// Each [`Debouncer::call`] re-arms the timer and cancels the previously
/// pending call, so only the last call of a burst runs, once the delay has
/// elapsed without another call. Dropping the debouncer cancels whatever is
/// pending.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Task<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay used by subsequent calls. A call that is already
    /// pending keeps the delay it was armed with.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending call, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::trace!("cancelled pending debounced call");
        }
    }

    /// Schedules `f` to run after the delay, replacing any pending call.
    /// With a zero delay `f` runs once the current update has finished, so
    /// it is free to update the entities that triggered it.
    pub fn call(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut Window, &mut App) + 'static,
    ) {
        self.cancel();

        if self.delay.is_zero() {
            cx.defer_in(window, move |_this, window, cx| f(window, cx));
            return;
        }

        let delay = self.delay;
        self.pending = Some(cx.spawn_in(window, async move |this, cx| {
            cx.background_executor().timer(delay).await;

            this.update_in(cx, |this, window, cx| {
                this.pending = None;
                tracing::trace!(?delay, "running debounced call");
                f(window, cx);
            })
            .ok();
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

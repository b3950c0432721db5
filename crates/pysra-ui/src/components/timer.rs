//! Cancellable scheduled tasks.

use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;

/// Holds at most one scheduled task for a widget.
///
/// Arming the slot cancels whatever it held before, so a widget can never
/// leak a ticker by being started twice.
#[derive(Clone, Copy, PartialEq)]
pub struct TimerSlot {
    task: Signal<Option<Task>>,
}

/// Create a timer slot owned by the current component.
///
/// Tasks are also dropped when the component unmounts.
pub fn use_timer_slot() -> TimerSlot {
    TimerSlot {
        task: use_signal(|| None),
    }
}

impl TimerSlot {
    /// Run `fut` as this slot's task, cancelling the previous one.
    pub fn arm(&mut self, fut: impl Future<Output = ()> + 'static) {
        self.cancel();
        let task = spawn(fut);
        self.task.set(Some(task));
    }

    /// Call `f` once after `delay`.
    pub fn after(&mut self, delay: Duration, f: impl FnOnce() + 'static) {
        self.arm(async move {
            tokio::time::sleep(delay).await;
            f();
        });
    }

    /// Call `f` every `period` until cancelled. The first call happens after
    /// one full period.
    pub fn every(&mut self, period: Duration, mut f: impl FnMut() + 'static) {
        self.arm(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                f();
            }
        });
    }

    /// Cancel the scheduled task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.write().take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::components::test_support::run_for;

    type Fired = Rc<RefCell<Vec<&'static str>>>;

    fn armed_twice(fired: Fired) -> Element {
        let mut slot = use_timer_slot();

        use_effect(move || {
            let first = fired.clone();
            slot.after(Duration::from_millis(100), move || first.borrow_mut().push("first"));
            let second = fired.clone();
            slot.after(Duration::from_millis(300), move || second.borrow_mut().push("second"));
        });

        rsx! {}
    }

    fn armed_then_cancelled(fired: Fired) -> Element {
        let mut slot = use_timer_slot();

        use_effect(move || {
            let fired = fired.clone();
            slot.after(Duration::from_millis(100), move || fired.borrow_mut().push("late"));
            slot.cancel();
        });

        rsx! {}
    }

    fn ticking(fired: Fired) -> Element {
        let mut slot = use_timer_slot();

        use_effect(move || {
            let fired = fired.clone();
            slot.every(Duration::from_millis(400), move || fired.borrow_mut().push("tick"));
        });

        rsx! {}
    }

    async fn fired_within(app: fn(Fired) -> Element, duration: Duration) -> Vec<&'static str> {
        let fired = Fired::default();
        let mut dom = VirtualDom::new_with_props(app, fired.clone());
        dom.rebuild_in_place();
        run_for(&mut dom, duration).await;
        let log = fired.borrow().clone();
        log
    }

    #[tokio::test(start_paused = true)]
    async fn arming_again_cancels_the_previous_task() {
        let fired = fired_within(armed_twice, Duration::from_secs(1)).await;
        assert_eq!(fired, vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_runs() {
        let fired = fired_within(armed_then_cancelled, Duration::from_secs(1)).await;
        assert!(fired.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn every_waits_a_full_period_before_each_call() {
        let fired = fired_within(ticking, Duration::from_millis(1300)).await;
        assert_eq!(fired, vec!["tick"; 3]);
    }
}

//! Drives a `VirtualDom` under paused tokio time.

use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

/// Poll the dom's tasks and re-render until `duration` of tokio time has
/// passed. With `start_paused` the clock jumps straight to each timer.
pub(crate) async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let _ = tokio::time::timeout(duration, async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
}

use std::time::Duration;

/// Sleep on the browser event loop. Outside the browser the future never
/// completes, so timers started during server rendering do nothing.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = duration;
        std::future::pending::<()>().await;
    }
}

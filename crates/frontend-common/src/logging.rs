//! Logging setup

/// Install the global tracing subscriber.
///
/// In the browser events go to the developer console; elsewhere they go to
/// stderr, filtered by `RUST_LOG`. Calling this more than once is harmless.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

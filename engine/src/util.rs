use tracing_forest::ForestLayer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// The default `Level` is `INFO`. It can be overridden with `RUST_LOG`, e.g.
/// `RUST_LOG=chip8vm_engine=trace` logs every dispatched instruction.
pub fn init_logger() {
    if cfg!(feature = "tracing-profile") || cfg!(feature = "perfetto") {
        use tracing_profile::init_tracing;
        let guard = init_tracing().expect("failed to initialize tracing");
        // The guard flushes the profile on drop; keep it for the process lifetime.
        std::mem::forget(guard);
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // A second initialisation (e.g. from several tests) is harmless.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ForestLayer::default())
            .try_init();
    }
}

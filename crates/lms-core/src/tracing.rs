use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor `LOG_LEVEL` yields a usable filter.
const DEFAULT_FILTER: &str = "info";

/// Initialize structured stdout tracing. Call once at service startup.
///
/// The filter comes from `RUST_LOG` when set. Otherwise `LOG_LEVEL` is read as
/// a plain level (`DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`, any case).
/// Both unset means `info`. Output is JSON on stdout only; there is no log file sink.
///
/// Safe to call multiple times; subsequent calls are silently ignored.
pub fn init_tracing() {
    let directive = filter_directive(
        std::env::var("RUST_LOG").ok(),
        std::env::var("LOG_LEVEL").ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}

fn filter_directive(rust_log: Option<String>, log_level: Option<String>) -> String {
    let non_empty = |v: Option<String>| v.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());

    if let Some(directive) = non_empty(rust_log) {
        return directive;
    }
    match non_empty(log_level).map(|l| l.to_ascii_lowercase()).as_deref() {
        Some("warning") => "warn".to_owned(),
        Some("critical" | "fatal") => "error".to_owned(),
        Some(level @ ("trace" | "debug" | "info" | "warn" | "error" | "off")) => level.to_owned(),
        _ => DEFAULT_FILTER.to_owned(),
    }
}

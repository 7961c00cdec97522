//! Logging integration for formforge.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-action spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a store action on behalf of an owner.
///
/// Attach this span to the action so that all log entries emitted during
/// processing include the action name and owner id.
///
/// # Examples
///
/// ```
/// use formforge_core::logging::action_span;
///
/// let span = action_span("create_form", "user-1");
/// let _guard = span.enter();
/// tracing::info!("creating form");
/// ```
pub fn action_span(action: &str, owner_id: &str) -> tracing::Span {
    tracing::info_span!("action", name = action, owner = owner_id)
}

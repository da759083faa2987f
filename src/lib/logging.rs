//! Console logging through `tracing`. Events are formatted by
//! `tracing-subscriber` and written to the browser console by `tracing-web`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    let level = option_env!("ROSTER_LOG")
        .and_then(|value| value.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);

    let console = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(console)
        .with(level)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

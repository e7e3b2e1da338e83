#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Test support for the fieldbind crates.
//!
//! Annotate tests with `#[fieldbind_testhelpers::test]` instead of `#[test]`
//! to get binder logs on failure. Verbosity is read from the `FIELDBIND_LOG`
//! environment variable as a target filter, e.g. `FIELDBIND_LOG=fieldbind=trace`;
//! the default is `debug` for everything.

pub use fieldbind_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FIELDBIND_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Seconds since the first test of the process started.
struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::DEBUG));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the tracing subscriber, once per process.
///
/// Called by `#[fieldbind_testhelpers::test]`; call it by hand from tests
/// that use another attribute.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

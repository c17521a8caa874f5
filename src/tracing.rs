//! Tracing initialization.
//!
//! Logs go to stderr so rendered results on stdout stay clean. Set
//! `DOCS_SEARCH_LOG_FORMAT=json` for one JSON object per event.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "DOCS_SEARCH_LOG_FORMAT";

/// Initialize tracing. Safe to call multiple times.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        let result = if json {
            let builder = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .json();
            if is_test {
                builder.with_test_writer().finish().try_init()
            } else {
                builder.with_writer(std::io::stderr).finish().try_init()
            }
        } else {
            let builder = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(true)
                .with_span_events(FmtSpan::NONE)
                .compact();
            if is_test {
                builder.with_test_writer().finish().try_init()
            } else {
                builder.with_writer(std::io::stderr).finish().try_init()
            }
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

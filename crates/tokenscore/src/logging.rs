//! Tracing subscriber setup for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Set to `1` for indented, span-nested output.
pub const LOG_TREE_ENV: &str = "TOKENSCORE_LOG_TREE";

/// Install the global subscriber once.
///
/// Filter directives come from `RUST_LOG` and default to `warn`, so
/// per-document failures show up without any configuration.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events reach the log. Targets are module paths, so the
/// library is named on its own rather than relying on the binary's prefix.
const LOG_TARGETS: [&str; 2] = ["termdeck", "termdeck_core"];

fn directives(quiet: bool) -> Vec<Directive> {
    let level = if quiet { "error" } else { "info" };
    LOG_TARGETS
        .iter()
        .filter_map(|target| format!("{}={}", target, level).parse().ok())
        .collect()
}

/// `RUST_LOG` plus one directive per termdeck crate.
pub fn log_filter(quiet: bool) -> EnvFilter {
    directives(quiet)
        .into_iter()
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive)
}

/// Initialize JSON logging on stderr.
///
/// Quiet mode keeps only errors; otherwise info and above are emitted
/// for both the CLI and the core library.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(log_filter(quiet))
        .init();
}

//! Tracing subscriber setup: console formatter and initialisation.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits compact
/// `dotem: LEVEL message` lines.
struct DotemFormatter {
    ansi: bool,
}

impl DotemFormatter {
    fn label(&self, level: tracing::Level) -> &'static str {
        match (level, self.ansi) {
            (tracing::Level::ERROR, true) => "\x1b[31merror\x1b[0m",
            (tracing::Level::WARN, true) => "\x1b[33mwarn\x1b[0m",
            (tracing::Level::INFO, true) => "\x1b[32minfo\x1b[0m",
            (_, true) => "\x1b[2mdebug\x1b[0m",
            (tracing::Level::ERROR, false) => "error",
            (tracing::Level::WARN, false) => "warn",
            (tracing::Level::INFO, false) => "info",
            (_, false) => "debug",
        }
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for DotemFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let label = self.label(*event.metadata().level());
        writeln!(writer, "dotem: {label} {}", extractor.message)
    }
}

/// Console level used when `RUST_LOG` is not set.
pub(super) const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All output goes to stderr: stdout carries the command line the shell hook
/// evaluates and must contain nothing else. `RUST_LOG` overrides the level
/// chosen by `verbose`. Must be called once at program startup.
pub fn init_subscriber(verbose: bool) {
    use std::io::IsTerminal as _;
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    let console_layer = fmt::layer()
        .event_format(DotemFormatter {
            ansi: std::io::stderr().is_terminal(),
        })
        .with_writer(std::io::stderr)
        .with_filter(filter);

    // Fails when a subscriber is already installed, as happens in tests.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

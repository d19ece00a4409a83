//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use super::config;

/// Keeps the non-blocking console writer alive. Logs stop flushing once it is dropped.
#[derive(Debug)]
pub struct LogGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Installs the global subscriber described by `conf`.
///
/// `RUST_LOG` takes precedence over `log.console.filtering_directive`.
/// Fails if a global subscriber was already installed.
pub fn setup(conf: &config::Log) -> Result<LogGuard, TryInitError> {
    let mut guards = Vec::new();

    if !conf.console.enabled {
        return Ok(LogGuard {
            _log_guards: guards,
        });
    }

    let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(guard);

    let subscriber = tracing_subscriber::registry().with(console_filter(&conf.console));

    match conf.console.log_format {
        config::LogFormat::Default => {
            let logging_layer = fmt::layer()
                .with_timer(fmt::time::time())
                .with_span_events(fmt::format::FmtSpan::CLOSE)
                .pretty()
                .with_writer(console_writer);

            subscriber.with(logging_layer).try_init()?;
        }
        config::LogFormat::Json => {
            let logging_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(console_writer);

            subscriber.with(logging_layer).try_init()?;
        }
    }

    Ok(LogGuard {
        _log_guards: guards,
    })
}

fn console_filter(console: &config::LogConsole) -> EnvFilter {
    let builder =
        EnvFilter::builder().with_default_directive(console.level.into_level().into());
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => builder.parse_lossy(directives),
        Err(_) => builder.parse_lossy(console.filtering_directive.as_deref().unwrap_or_default()),
    }
}

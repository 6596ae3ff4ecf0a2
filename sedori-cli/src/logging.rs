use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Where log output goes. Stdout is never used; it belongs to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// A bare level or any `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub stderr: bool,
    /// Appended to, created if missing.
    pub file: Option<PathBuf>,
}

/// `local time  LEVEL target fields`, colored on a terminal.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            let color = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{stamp}\x1b[0m \x1b[{color}m{:>5}\x1b[0m \x1b[36m{}\x1b[0m ",
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{stamp} {:>5} {} ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_filter(
    level: &str,
    env: Option<&str>,
) -> Result<EnvFilter> {
    match env {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG '{directives}'")),
        None => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
        }
    }
}

/// Installs the global subscriber. Call once, after the config is known.
pub fn init(options: &LogOptions) -> Result<()> {
    let env = std::env::var("RUST_LOG").ok();
    let filter = level_filter(&options.level, env.as_deref())?;

    let stderr_layer = options.stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });

    let file_layer = match &options.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn configured_level_applies_without_env() {
        let filter = level_filter("debug", None).unwrap();

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn env_directives_win_over_config() {
        let filter = level_filter("debug", Some("error")).unwrap();

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn bad_level_is_reported() {
        let err = level_filter("sedori=loud", None).unwrap_err();

        assert!(err.to_string().contains("sedori=loud"));
    }
}

use colored::{ColoredString, Colorize};
use std::{fmt, time::Duration};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

pub struct FormatElapsedTimeOptions<'a> {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
    pub(crate) additional_fn: Option<&'a (dyn Fn(ColoredString) -> ColoredString + Sync)>,
}

impl Default for FormatElapsedTimeOptions<'_> {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
            additional_fn: None,
        }
    }
}

impl FormatElapsedTimeOptions<'_> {
    /// Thresholds for one-off startup work, where a few hundred milliseconds is normal.
    pub fn default_dev() -> Self {
        Self {
            millis_yellow_threshold: None,
            millis_red_threshold: None,
            ..Default::default()
        }
    }
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    let result = match elapsed.as_secs() {
        secs if secs > 60 => {
            let mins = secs / 60;
            let secs = secs % 60;
            format!("{}m{}s", mins, secs).red()
        }
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).dimmed(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).dimmed(),
            _ => format!("{}μs", elapsed.as_micros()).dimmed(),
        },
    };

    if let Some(additional_fn) = &options.additional_fn {
        additional_fn(result)
    } else {
        result
    }
}

/// Label printed after the timestamp. Events forwarded from `log` carry their target instead of a name.
fn event_label(metadata: &Metadata<'_>) -> String {
    let name = metadata.name();
    if name == "log event" || name.starts_with("event ") {
        return metadata
            .target()
            .rsplit("::")
            .next()
            .unwrap_or_default()
            .to_string();
    }

    name.to_string()
}

pub struct EventLoggerFormatter {
    quiet: bool,
}

impl<S, N> FormatEvent<S, N> for EventLoggerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if self.quiet {
            return Ok(());
        }

        if event.metadata().name() == "SKIP_FORMAT" {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string().dimmed();
        let label = event_label(event.metadata());

        write!(
            writer,
            "{}{} ",
            timestamp,
            if label.is_empty() {
                String::new()
            } else {
                format!(" {}", label.to_ascii_lowercase().bold().bright_yellow())
            }
        )?;

        if *event.metadata().level() == tracing::Level::ERROR {
            write!(writer, "{} ", "error".bold().red())?;
        } else if *event.metadata().level() == tracing::Level::WARN {
            write!(writer, "{} ", "warn".bold().yellow())?;
        }

        // Write fields on the event
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. Logs go to stderr so that `render` output on stdout stays clean.
pub fn init_logging(quiet: bool) {
    let tracing_formatter = tracing_subscriber::fmt::layer()
        .event_format(EventLoggerFormatter { quiet })
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=info,render=info,assets=info,tower_http=info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_formatter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(elapsed: Duration, options: &FormatElapsedTimeOptions) -> String {
        colored::control::set_override(false);
        format_elapsed_time(elapsed, options).to_string()
    }

    #[test]
    fn test_format_elapsed_time_units() {
        let options = FormatElapsedTimeOptions::default();

        assert_eq!(plain(Duration::from_micros(250), &options), "250μs");
        assert_eq!(plain(Duration::from_millis(42), &options), "42ms");
        assert_eq!(plain(Duration::from_secs(3), &options), "3s");
        assert_eq!(plain(Duration::from_secs(125), &options), "2m5s");
    }

    #[test]
    fn test_additional_fn_is_applied() {
        let bold = |s: ColoredString| s.bold();
        let options = FormatElapsedTimeOptions {
            additional_fn: Some(&bold),
            ..Default::default()
        };

        assert_eq!(plain(Duration::from_millis(7), &options), "7ms");
    }
}

//! Logging setup.
//!
//! Outside a runner this is the plain `tracing_subscriber` formatter. Inside
//! a runner every event becomes a workflow command so that errors annotate
//! the run and debug lines only show with step debugging enabled.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Event formatter emitting `::error::`, `::warning::` and `::debug::` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowCommands;

impl WorkflowCommands {
    fn command(level: Level) -> Option<&'static str> {
        match level {
            Level::ERROR => Some("error"),
            Level::WARN => Some("warning"),
            Level::INFO => None,
            _ => Some("debug"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for WorkflowCommands
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
        let mut message = String::new();
        ctx.field_format()
            .format_fields(format::Writer::new(&mut message), event)?;

        match Self::command(*event.metadata().level()) {
            Some(command) => writeln!(writer, "::{}::{}", command, super::escape_data(&message)),
            None => writeln!(writer, "{}", message),
        }
    }
}

/// Install the global subscriber
///
/// `verbose` adds a `debug` directive on top of `RUST_LOG`. Under GitHub
/// Actions debug output is always produced; the runner hides it unless step
/// debugging is on.
pub fn init(verbose: bool) {
    let on_runner = super::is_github_actions();
    let level = if verbose || on_runner {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if on_runner {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .event_format(WorkflowCommands)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

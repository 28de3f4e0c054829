//! Custom event formatter for human-readable console logs.

use std::fmt;
use time::OffsetDateTime;
use time::macros::format_description;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format};
use tracing_subscriber::registry::LookupSpan;

/// Single-line formatter with a local timestamp and colored level.
pub struct DevelopmentFormatter;

impl<S, N> FormatEvent<S, N> for DevelopmentFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let time = now
            .format(format_description!(
                "[hour]:[minute]:[second].[subsecond digits:3]"
            ))
            .unwrap_or_default();

        let metadata = event.metadata();
        let level = if writer.has_ansi_escapes() {
            match *metadata.level() {
                tracing::Level::TRACE => "\x1b[36mTRACE\x1b[0m",
                tracing::Level::DEBUG => "\x1b[34mDEBUG\x1b[0m",
                tracing::Level::INFO => "\x1b[32mINFO \x1b[0m",
                tracing::Level::WARN => "\x1b[33mWARN \x1b[0m",
                tracing::Level::ERROR => "\x1b[31mERROR\x1b[0m",
            }
        } else {
            match *metadata.level() {
                tracing::Level::TRACE => "TRACE",
                tracing::Level::DEBUG => "DEBUG",
                tracing::Level::INFO => "INFO ",
                tracing::Level::WARN => "WARN ",
                tracing::Level::ERROR => "ERROR",
            }
        };

        write!(writer, "{} {} [{}] ", time, level, metadata.target())?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}: ", span.name())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

//! Module for all Logger related things

use std::backtrace::Backtrace;

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use flexi_logger::{style, DeferredNow, FileSpec, Logger, LoggerHandle, Record};

use crate::cli::LogOptions;

/// Level used when `RUST_LOG` is not set
const DEFAULT_LEVEL: &str = "info";

/// Set up the logger, the returned handle has to be kept alive for the whole run
pub fn setup(options: &LogOptions) -> Result<LoggerHandle> {
    let mut logger = Logger::try_with_env_or_str(DEFAULT_LEVEL)
        .context("parsing log specification")?
        .adaptive_format_for_stderr(flexi_logger::AdaptiveFormat::Custom(
            log_format,
            color_log_format,
        ))
        .panic_if_error_channel_is_broken(false)
        .log_to_stderr();

    if options.log_to_file {
        if options.file_color_log {
            logger = logger.format_for_files(color_log_format);
        } else {
            logger = logger.format_for_files(log_format);
        }

        let filespec = FileSpec::try_from(&options.log_file)
            .with_context(|| format!("log file \"{}\"", options.log_file.display()))?;
        logger = logger
            .log_to_file(filespec)
            .append()
            .duplicate_to_stderr(flexi_logger::Duplicate::All);
    }

    let handle = logger.start().context("starting logger")?;

    if options.log_to_file {
        println!(
            "Logging to file \"{}\"",
            options.log_file.to_string_lossy()
        );
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        // this works because rust will execute the panic hook before unwinding
        let backtrace = Backtrace::capture();
        error!("Panic occured:\n{panic}\n{backtrace}");
        original_hook(panic);
    }));

    Ok(handle)
}

/// Logging format for log files and non-interactive formats
/// Not Colored and not padded
///
/// Example Lines:
/// `[2024-03-02T13:42:43.374+0100 ERROR collectorzlib::export]: Exporting Heat (1995) failed`
pub fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record<'_>,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{} {} {}]: {}", // dont pad anything for non-interactive logs
        now.format_rfc3339(),
        record.level(),
        record.module_path().unwrap_or("<unnamed module>"),
        &record.args()
    )
}

/// Logging format for a tty for interactive formats
/// Colored and padded
///
/// Example Lines:
/// `[2024-03-02T13:42:43.374+0100 INFO  collectorzlib::reader]: Read 412 media from catalog`
pub fn color_log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record<'_>,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "[{} {} {}]: {}",
        now.format_rfc3339().color(Color::BrightBlack), // Bright Black = Grey
        style(level).paint(format!("{level:5}")), // pad level, cannot be done in the string itself, because of the color characters
        record.module_path().unwrap_or("<unnamed module>"),
        &record.args()
    )
}

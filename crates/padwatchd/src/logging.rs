// Colorized wrappers for logging

use fern::Dispatch;

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        log::error!("{}", format!($($arg)*).bright_red());
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        log::debug!("{}", format!($($arg)*).dimmed());
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        log::warn!("{}", format!($($arg)*).bright_yellow());
    }
}

const CRATES: [&str; 3] = ["padwatchd", "padwatch_monitor", "padwatch_gamepad"];

/// Setup the logger.
pub(crate) fn setup(verbose: bool, no_color: bool) -> Result<(), log::SetLoggerError> {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut dispatch = Dispatch::new()
        .format(|out, message, _record| {
            let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S");
            out.finish(format_args!("[{now}] {message}"));
        })
        .level(log::LevelFilter::Error);
    for name in CRATES {
        dispatch = dispatch.level_for(name, log_level);
    }
    dispatch.chain(std::io::stdout()).apply()?;

    if no_color {
        colored::control::set_override(false);
    }
    Ok(())
}

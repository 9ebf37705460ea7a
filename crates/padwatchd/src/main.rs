mod cli;
mod handlers;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::{select, tick, unbounded};
use padwatch_gamepad::DriverContext;
use padwatch_monitor::{ControllerMonitor, RunFlag};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup(cli.verbose, cli.no_color) {
        eprintln!("unable to set up logger: {e}");
        return ExitCode::FAILURE;
    }

    // Handle Ctrl+C to exit cleanly
    let (stop_tx, stop_rx) = unbounded::<()>();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    }) {
        print_error!("failed to set Ctrl+C handler: {e}");
        return ExitCode::FAILURE;
    }

    // SDL lives on this thread and is released when `context` drops,
    // after the monitor that holds the device.
    let mut context = match DriverContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            print_error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let running = RunFlag::new();
    let handlers = handlers::example_handlers(running.clone());
    let mut monitor =
        match ControllerMonitor::init(&mut context, cli.monitor_config(), handlers) {
            Ok(monitor) => monitor.with_run_flag(running.clone()),
            Err(e) => {
                print_error!("failed to open joystick {}: {e}", cli.device);
                return ExitCode::FAILURE;
            }
        };

    if monitor.repeat_interval().is_zero() {
        print_info!("watching {}, auto-repeat off", monitor.device_name());
    } else {
        print_info!(
            "watching {}, auto-repeat every {} ms",
            monitor.device_name(),
            cli.interval
        );
    }

    let ticker = tick(cli.tick());
    while monitor.is_running() {
        select! {
            recv(stop_rx) -> _ => {
                print_warning!("interrupted");
                running.stop();
            }
            recv(ticker) -> _ => {
                monitor.poll();
            }
        }
    }

    print_info!("padwatchd stopped");
    ExitCode::SUCCESS
}

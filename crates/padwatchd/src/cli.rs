use std::time::Duration;

use clap::Parser;
use padwatch_monitor::MonitorConfig;

/// Watch a game controller and report its sticks, hats and buttons.
/// Releasing button 0 stops the watcher.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Auto-repeat interval for held inputs in milliseconds, 0 disables it
    #[arg(default_value_t = 0)]
    pub interval: u64,

    /// Index of the joystick to open
    #[arg(short, long, default_value_t = 0)]
    pub device: u32,

    /// Axis values with a smaller magnitude are reported as 0
    #[arg(long, default_value_t = MonitorConfig::DEFAULT_DEADZONE)]
    pub deadzone: f32,

    /// Poll cadence in milliseconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick: u64,

    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub(crate) fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig::default()
            .with_device_index(self.device)
            .with_deadzone(self.deadzone)
            .with_repeat_interval_ms(self.interval)
    }

    pub(crate) fn tick(&self) -> Duration {
        Duration::from_millis(self.tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_invocation() {
        let cli = Cli::try_parse_from(["padwatchd"]).expect("no args is valid");
        let config = cli.monitor_config();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(cli.tick(), Duration::from_millis(30));
    }

    #[test]
    fn first_positional_is_repeat_interval() {
        let cli = Cli::try_parse_from(["padwatchd", "100", "--device", "2"])
            .expect("valid args");
        let config = cli.monitor_config();
        assert_eq!(config.repeat_interval, Duration::from_millis(100));
        assert_eq!(config.device_index, 2);
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Cli::try_parse_from(["padwatchd", "--tick", "0"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

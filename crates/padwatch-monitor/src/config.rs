use std::time::Duration;

use padwatch_gamepad::{DeviceIndex, Error, Result};

/// Monitor settings, fixed once the monitor is created.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Device to open, in driver enumeration order.
    pub device_index: DeviceIndex,
    /// Axis magnitudes strictly below this are stored as 0.
    pub deadzone: f32,
    /// Auto-repeat period for held inputs. Zero disables auto-repeat.
    pub repeat_interval: Duration,
}

impl MonitorConfig {
    pub const DEFAULT_DEADZONE: f32 = 0.05;

    pub fn with_device_index(mut self, index: DeviceIndex) -> Self {
        self.device_index = index;
        self
    }

    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    pub fn with_repeat_interval(mut self, interval: Duration) -> Self {
        self.repeat_interval = interval;
        self
    }

    pub fn with_repeat_interval_ms(self, ms: u64) -> Self {
        self.with_repeat_interval(Duration::from_millis(ms))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.deadzone.is_finite() || self.deadzone < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "deadzone must be a non-negative number, got {}",
                self.deadzone
            )));
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            device_index: 0,
            deadzone: Self::DEFAULT_DEADZONE,
            repeat_interval: Duration::ZERO,
        }
    }
}

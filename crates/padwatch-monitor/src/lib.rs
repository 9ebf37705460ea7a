mod config;
mod flag;
mod handlers;
mod monitor;
mod repeat;
mod state;

pub use crate::config::MonitorConfig;
pub use crate::flag::RunFlag;
pub use crate::handlers::{HandlerError, HandlerResult, Handlers};
pub use crate::monitor::{ControllerMonitor, EventClass};
pub use crate::repeat::RepeatTimers;
pub use crate::state::{apply_deadzone, DeviceState};

pub use padwatch_gamepad::{
    Backend, Device, DeviceIndex, Error, HatDirection, RawEvent, RepeatKind, Result,
};

mod device;
mod error;
mod events;
pub mod mock;
#[cfg(feature = "sdl2-backend")]
mod runtime;
mod types;

pub use crate::device::{Backend, Device};
pub use crate::error::{Error, Result};
pub use crate::events::{EventBatch, RawEvent};
#[cfg(feature = "sdl2-backend")]
pub use crate::runtime::{DriverContext, SdlJoystick};
pub use crate::types::{DeviceIndex, HatDirection, RepeatKind};

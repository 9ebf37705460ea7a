use smallvec::SmallVec;

use crate::types::{HatDirection, RepeatKind};

/// Raw events delivered by a device, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    /// An axis moved; value is normalized to [-1.0, 1.0].
    AxisMotion { axis: u8, value: f32 },
    /// A hat changed direction.
    HatMotion { hat: u8, direction: HatDirection },
    /// A button was pressed.
    ButtonDown { button: u8 },
    /// A button was released.
    ButtonUp { button: u8 },
    /// Re-delivery produced by an armed repeat timer.
    Repeat(RepeatKind),
    /// The application was asked to quit.
    Quit,
    /// The monitored device went away.
    DeviceRemoved,
    /// Anything else the driver saw, kept for diagnostics.
    Unknown(String),
}

/// Events collected during a single poll.
pub type EventBatch = SmallVec<[RawEvent; 16]>;

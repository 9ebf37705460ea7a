use sdl2::event::Event;
use sdl2::joystick::{HatState, Joystick};
use sdl2::{EventPump, JoystickSubsystem, Sdl};

use crate::device::{Backend, Device};
use crate::error::{Error, Result};
use crate::events::{EventBatch, RawEvent};
use crate::types::{DeviceIndex, HatDirection};

const BACKGROUND_EVENTS_HINT: &str = "SDL_JOYSTICK_ALLOW_BACKGROUND_EVENTS";

/// Scoped SDL2 acquisition. SDL is shut down when the context and every
/// device opened from it are dropped.
pub struct DriverContext {
    sdl: Sdl,
    joystick_subsystem: JoystickSubsystem,
}

impl DriverContext {
    /// Initializes SDL2 and its joystick subsystem.
    /// Must be called on the thread that will poll the device.
    pub fn new() -> Result<Self> {
        // No window ever gets focus, so events must be delivered regardless.
        sdl2::hint::set(BACKGROUND_EVENTS_HINT, "1");
        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let joystick_subsystem = sdl.joystick().map_err(Error::BackendInit)?;
        Ok(Self {
            sdl,
            joystick_subsystem,
        })
    }

    /// Number of joysticks currently attached.
    pub fn device_count(&self) -> Result<u32> {
        self.joystick_subsystem
            .num_joysticks()
            .map_err(Error::BackendInit)
    }
}

impl Backend for DriverContext {
    type Device = SdlJoystick;

    fn open(&mut self, index: DeviceIndex) -> Result<SdlJoystick> {
        if index >= self.device_count()? {
            return Err(Error::DeviceNotFound(index));
        }
        let joystick = self
            .joystick_subsystem
            .open(index)
            .map_err(|e| Error::DeviceInit(e.to_string()))?;
        // Only one pump may exist at a time, which also limits us to one device.
        let event_pump = self.sdl.event_pump().map_err(Error::DeviceInit)?;
        Ok(SdlJoystick::new(joystick, event_pump))
    }
}

/// A joystick opened through SDL2.
pub struct SdlJoystick {
    joystick: Joystick,
    event_pump: EventPump,
    instance_id: u32,
    name: String,
    axes: usize,
    buttons: usize,
    hats: usize,
}

impl SdlJoystick {
    fn new(joystick: Joystick, event_pump: EventPump) -> Self {
        Self {
            instance_id: joystick.instance_id(),
            name: joystick.name(),
            axes: joystick.num_axes() as usize,
            buttons: joystick.num_buttons() as usize,
            hats: joystick.num_hats() as usize,
            joystick,
            event_pump,
        }
    }

    fn map_event(&self, event: Event) -> RawEvent {
        match event {
            Event::JoyAxisMotion {
                which,
                axis_idx,
                value,
                ..
            } if which == self.instance_id => RawEvent::AxisMotion {
                axis: axis_idx,
                value: normalize_axis(value),
            },
            Event::JoyHatMotion {
                which,
                hat_idx,
                state,
                ..
            } if which == self.instance_id => RawEvent::HatMotion {
                hat: hat_idx,
                direction: map_hat(state),
            },
            Event::JoyButtonDown {
                which, button_idx, ..
            } if which == self.instance_id => {
                RawEvent::ButtonDown { button: button_idx }
            }
            Event::JoyButtonUp {
                which, button_idx, ..
            } if which == self.instance_id => {
                RawEvent::ButtonUp { button: button_idx }
            }
            Event::JoyDeviceRemoved { which, .. } if which == self.instance_id => {
                RawEvent::DeviceRemoved
            }
            Event::Quit { .. } => RawEvent::Quit,
            other => RawEvent::Unknown(format!("{other:?}")),
        }
    }
}

impl Device for SdlJoystick {
    fn name(&self) -> &str {
        &self.name
    }

    fn axis_count(&self) -> usize {
        self.axes
    }

    fn button_count(&self) -> usize {
        self.buttons
    }

    fn hat_count(&self) -> usize {
        self.hats
    }

    fn read_axis(&self, index: usize) -> f32 {
        let Ok(idx) = u32::try_from(index) else {
            return 0.0;
        };
        match self.joystick.axis(idx) {
            Ok(value) => normalize_axis(value),
            Err(e) => {
                log::debug!("axis {index} read failed: {e}");
                0.0
            }
        }
    }

    fn read_button(&self, index: usize) -> bool {
        let Ok(idx) = u32::try_from(index) else {
            return false;
        };
        match self.joystick.button(idx) {
            Ok(pressed) => pressed,
            Err(e) => {
                log::debug!("button {index} read failed: {e}");
                false
            }
        }
    }

    fn read_hat(&self, index: usize) -> HatDirection {
        let Ok(idx) = u32::try_from(index) else {
            return HatDirection::CENTERED;
        };
        match self.joystick.hat(idx) {
            Ok(state) => map_hat(state),
            Err(e) => {
                log::debug!("hat {index} read failed: {e}");
                HatDirection::CENTERED
            }
        }
    }

    fn poll_events(&mut self) -> EventBatch {
        let mut batch = EventBatch::new();
        // Drain first, the pump is borrowed mutably while iterating.
        let pending: Vec<Event> = self.event_pump.poll_iter().collect();
        for event in pending {
            batch.push(self.map_event(event));
        }
        batch
    }
}

fn normalize_axis(value: i16) -> f32 {
    (f32::from(value) / f32::from(i16::MAX)).clamp(-1.0, 1.0)
}

fn map_hat(state: HatState) -> HatDirection {
    let (x, y) = match state {
        HatState::Centered => (0, 0),
        HatState::Up => (0, 1),
        HatState::Right => (1, 0),
        HatState::Down => (0, -1),
        HatState::Left => (-1, 0),
        HatState::RightUp => (1, 1),
        HatState::RightDown => (1, -1),
        HatState::LeftUp => (-1, 1),
        HatState::LeftDown => (-1, -1),
    };
    HatDirection::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_axis_stays_in_unit_range() {
        assert_eq!(normalize_axis(0), 0.0);
        assert_eq!(normalize_axis(i16::MAX), 1.0);
        assert_eq!(normalize_axis(i16::MIN), -1.0);
    }

    #[test]
    fn map_hat_points_up_as_positive_y() {
        assert_eq!(map_hat(HatState::Up), HatDirection::new(0, 1));
        assert_eq!(map_hat(HatState::LeftDown), HatDirection::new(-1, -1));
        assert!(map_hat(HatState::Centered).is_centered());
    }
}

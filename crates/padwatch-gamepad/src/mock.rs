//! Scripted devices for tests and benchmarks.
//!
//! A [`MockDevice`] holds raw values that are returned by reads and an event
//! queue that is drained by [`Device::poll_events`]. The helpers such as
//! [`MockDevice::press`] update the raw value and queue the matching event,
//! which is what a real driver would do.

use std::collections::VecDeque;

use crate::device::{Backend, Device};
use crate::error::{Error, Result};
use crate::events::{EventBatch, RawEvent};
use crate::types::{DeviceIndex, HatDirection};

#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    name: String,
    axes: Vec<f32>,
    buttons: Vec<bool>,
    hats: Vec<HatDirection>,
    queue: VecDeque<RawEvent>,
}

impl MockDevice {
    pub fn new(name: &str, axes: usize, buttons: usize, hats: usize) -> Self {
        Self {
            name: name.to_string(),
            axes: vec![0.0; axes],
            buttons: vec![false; buttons],
            hats: vec![HatDirection::CENTERED; hats],
            queue: VecDeque::new(),
        }
    }

    /// Sets a raw axis value without queueing an event.
    pub fn set_axis(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.axes.get_mut(index) {
            *slot = value.clamp(-1.0, 1.0);
        }
    }

    pub fn set_button(&mut self, index: usize, pressed: bool) {
        if let Some(slot) = self.buttons.get_mut(index) {
            *slot = pressed;
        }
    }

    pub fn set_hat(&mut self, index: usize, direction: HatDirection) {
        if let Some(slot) = self.hats.get_mut(index) {
            *slot = direction;
        }
    }

    pub fn push_event(&mut self, event: RawEvent) {
        self.queue.push_back(event);
    }

    /// Sets an axis and queues the motion event.
    pub fn move_axis(&mut self, index: u8, value: f32) {
        self.set_axis(usize::from(index), value);
        self.push_event(RawEvent::AxisMotion { axis: index, value });
    }

    /// Sets every axis at once and queues a single motion event.
    pub fn move_axes(&mut self, values: &[f32]) {
        for (i, v) in values.iter().enumerate() {
            self.set_axis(i, *v);
        }
        self.push_event(RawEvent::AxisMotion {
            axis: 0,
            value: self.axes.first().copied().unwrap_or(0.0),
        });
    }

    pub fn move_hat(&mut self, index: u8, direction: HatDirection) {
        self.set_hat(usize::from(index), direction);
        self.push_event(RawEvent::HatMotion {
            hat: index,
            direction,
        });
    }

    pub fn press(&mut self, button: u8) {
        self.set_button(usize::from(button), true);
        self.push_event(RawEvent::ButtonDown { button });
    }

    pub fn release(&mut self, button: u8) {
        self.set_button(usize::from(button), false);
        self.push_event(RawEvent::ButtonUp { button });
    }

    /// Number of events waiting to be polled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Device for MockDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn axis_count(&self) -> usize {
        self.axes.len()
    }

    fn button_count(&self) -> usize {
        self.buttons.len()
    }

    fn hat_count(&self) -> usize {
        self.hats.len()
    }

    fn read_axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    fn read_button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    fn read_hat(&self, index: usize) -> HatDirection {
        self.hats.get(index).copied().unwrap_or_default()
    }

    fn poll_events(&mut self) -> EventBatch {
        self.queue.drain(..).collect()
    }
}

/// Backend handing out clones of registered mock devices.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    devices: Vec<MockDevice>,
    broken: Vec<DeviceIndex>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device: MockDevice) -> Self {
        self.devices.push(device);
        self
    }

    /// Makes opening `index` fail as if the driver could not initialize it.
    pub fn with_broken(mut self, index: DeviceIndex) -> Self {
        self.broken.push(index);
        self
    }
}

impl Backend for MockBackend {
    type Device = MockDevice;

    fn open(&mut self, index: DeviceIndex) -> Result<MockDevice> {
        let device = usize::try_from(index)
            .ok()
            .and_then(|i| self.devices.get(i))
            .ok_or(Error::DeviceNotFound(index))?;
        if self.broken.contains(&index) {
            return Err(Error::DeviceInit(format!(
                "{} refused to initialize",
                device.name
            )));
        }
        Ok(device.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_state_and_queues_event() {
        let mut dev = MockDevice::new("pad", 2, 4, 1);
        dev.press(2);
        assert!(dev.read_button(2));
        assert_eq!(dev.pending(), 1);
        let events = dev.poll_events();
        assert_eq!(events.as_slice(), &[RawEvent::ButtonDown { button: 2 }]);
        assert_eq!(dev.pending(), 0);
    }

    #[test]
    fn move_axes_event_carries_stored_value() {
        let mut dev = MockDevice::new("pad", 2, 0, 0);
        dev.move_axes(&[1.5, -0.25]);
        assert_eq!(dev.read_axis(0), 1.0);
        let events = dev.poll_events();
        assert_eq!(
            events.as_slice(),
            &[RawEvent::AxisMotion { axis: 0, value: 1.0 }]
        );
    }

    #[test]
    fn out_of_range_reads_are_neutral() {
        let dev = MockDevice::new("pad", 1, 1, 1);
        assert_eq!(dev.read_axis(9), 0.0);
        assert!(!dev.read_button(9));
        assert!(dev.read_hat(9).is_centered());
    }

    #[test]
    fn backend_reports_missing_and_broken_devices() {
        let mut backend = MockBackend::new()
            .with_device(MockDevice::new("a", 0, 0, 0))
            .with_device(MockDevice::new("b", 0, 0, 0))
            .with_broken(1);
        assert!(backend.open(0).is_ok());
        assert!(matches!(backend.open(1), Err(Error::DeviceInit(_))));
        assert!(matches!(backend.open(7), Err(Error::DeviceNotFound(7))));
    }
}

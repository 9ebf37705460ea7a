use crate::error::Result;
use crate::events::EventBatch;
use crate::types::{DeviceIndex, HatDirection};

/// An opened input device.
///
/// Capability counts are fixed for the lifetime of the device. Reads with an
/// index outside of the reported count return a neutral value.
pub trait Device {
    fn name(&self) -> &str;
    fn axis_count(&self) -> usize;
    fn button_count(&self) -> usize;
    fn hat_count(&self) -> usize;

    /// Current raw axis value in [-1.0, 1.0].
    fn read_axis(&self, index: usize) -> f32;
    fn read_button(&self, index: usize) -> bool;
    fn read_hat(&self, index: usize) -> HatDirection;

    /// Drains all events queued since the previous call.
    fn poll_events(&mut self) -> EventBatch;
}

/// Something that can open devices by index.
pub trait Backend {
    type Device: Device;

    fn open(&mut self, index: DeviceIndex) -> Result<Self::Device>;
}

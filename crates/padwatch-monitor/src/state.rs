use padwatch_gamepad::{Device, HatDirection};

/// Zeroes `raw` when its magnitude is below `deadzone`, otherwise returns it unchanged.
#[inline]
pub fn apply_deadzone(raw: f32, deadzone: f32) -> f32 {
    if raw.abs() < deadzone {
        0.0
    } else {
        raw
    }
}

/// Last sampled, normalized state of a device.
///
/// Sequence lengths are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    axes: Vec<f32>,
    buttons: Vec<bool>,
    hats: Vec<HatDirection>,
    deadzone: f32,
}

impl DeviceState {
    pub fn new(axes: usize, buttons: usize, hats: usize, deadzone: f32) -> Self {
        Self {
            axes: vec![0.0; axes],
            buttons: vec![false; buttons],
            hats: vec![HatDirection::CENTERED; hats],
            deadzone,
        }
    }

    /// Zeroed state sized after the device's capabilities.
    pub fn for_device<D: Device + ?Sized>(device: &D, deadzone: f32) -> Self {
        Self::new(
            device.axis_count(),
            device.button_count(),
            device.hat_count(),
            deadzone,
        )
    }

    pub fn axes(&self) -> &[f32] {
        &self.axes
    }

    pub fn buttons(&self) -> &[bool] {
        &self.buttons
    }

    pub fn hats(&self) -> &[HatDirection] {
        &self.hats
    }

    pub fn hat(&self, index: usize) -> Option<HatDirection> {
        self.hats.get(index).copied()
    }

    /// Indices of buttons currently held.
    pub fn pressed_buttons(&self) -> impl Iterator<Item = usize> + '_ {
        self.buttons
            .iter()
            .enumerate()
            .filter_map(|(i, pressed)| pressed.then_some(i))
    }

    pub fn axes_neutral(&self) -> bool {
        self.axes.iter().all(|v| *v == 0.0)
    }

    pub fn buttons_neutral(&self) -> bool {
        !self.buttons.iter().any(|pressed| *pressed)
    }

    pub fn hats_neutral(&self) -> bool {
        self.hats.iter().all(HatDirection::is_centered)
    }

    pub fn sample_axes<D: Device + ?Sized>(&mut self, device: &D) -> &[f32] {
        let deadzone = self.deadzone;
        for (i, slot) in self.axes.iter_mut().enumerate() {
            *slot = apply_deadzone(device.read_axis(i), deadzone);
        }
        &self.axes
    }

    pub fn sample_buttons<D: Device + ?Sized>(&mut self, device: &D) -> &[bool] {
        for (i, slot) in self.buttons.iter_mut().enumerate() {
            *slot = device.read_button(i);
        }
        &self.buttons
    }

    pub fn sample_hats<D: Device + ?Sized>(&mut self, device: &D) -> &[HatDirection] {
        for (i, slot) in self.hats.iter_mut().enumerate() {
            *slot = device.read_hat(i);
        }
        &self.hats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padwatch_gamepad::mock::MockDevice;

    #[test]
    fn deadzone_zeroes_small_values_only() {
        let deadzone = 0.05;
        for v in [0.0, 0.01, -0.01, 0.049, -0.049] {
            assert_eq!(apply_deadzone(v, deadzone), 0.0, "value {v}");
        }
        for v in [0.05, -0.05, 0.5, -1.0, 1.0] {
            assert_eq!(apply_deadzone(v, deadzone), v, "value {v}");
        }
    }

    #[test]
    fn zero_deadzone_passes_everything() {
        assert_eq!(apply_deadzone(1e-6, 0.0), 1e-6);
    }

    #[test]
    fn sample_axes_filters_through_deadzone() {
        let mut dev = MockDevice::new("pad", 4, 0, 0);
        for (i, v) in [0.02, 0.5, -0.5, 0.0].into_iter().enumerate() {
            dev.set_axis(i, v);
        }
        let mut state = DeviceState::for_device(&dev, 0.05);
        assert_eq!(state.sample_axes(&dev), &[0.0, 0.5, -0.5, 0.0]);
        assert!(!state.axes_neutral());
    }

    #[test]
    fn noise_below_deadzone_is_neutral() {
        let mut dev = MockDevice::new("pad", 4, 0, 0);
        for i in 0..4 {
            dev.set_axis(i, 0.01);
        }
        let mut state = DeviceState::for_device(&dev, 0.05);
        state.sample_axes(&dev);
        assert_eq!(state.axes(), &[0.0; 4]);
        assert!(state.axes_neutral());
    }

    #[test]
    fn empty_sequences_are_neutral() {
        let state = DeviceState::new(0, 0, 0, 0.05);
        assert!(state.axes_neutral());
        assert!(state.buttons_neutral());
        assert!(state.hats_neutral());
    }

    #[test]
    fn single_negative_axis_is_not_neutral() {
        let mut dev = MockDevice::new("pad", 3, 0, 0);
        dev.set_axis(2, -0.3);
        let mut state = DeviceState::for_device(&dev, 0.05);
        state.sample_axes(&dev);
        assert!(!state.axes_neutral());
    }

    #[test]
    fn buttons_and_hats_are_sampled_unfiltered() {
        let mut dev = MockDevice::new("pad", 0, 4, 2);
        dev.set_button(1, true);
        dev.set_button(3, true);
        dev.set_hat(1, HatDirection::new(-1, 0));
        let mut state = DeviceState::for_device(&dev, 0.05);

        assert_eq!(state.sample_buttons(&dev), &[false, true, false, true]);
        assert_eq!(state.pressed_buttons().collect::<Vec<_>>(), vec![1, 3]);
        assert!(!state.buttons_neutral());

        state.sample_hats(&dev);
        assert_eq!(state.hat(1), Some(HatDirection::new(-1, 0)));
        assert!(!state.hats_neutral());
    }

    #[test]
    fn lengths_follow_device_capabilities() {
        let dev = MockDevice::new("pad", 6, 11, 1);
        let state = DeviceState::for_device(&dev, 0.05);
        assert_eq!(state.axes().len(), 6);
        assert_eq!(state.buttons().len(), 11);
        assert_eq!(state.hats().len(), 1);
    }
}

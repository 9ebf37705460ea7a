use colored::Colorize;
use padwatch_monitor::{DeviceState, Handlers, RunFlag};

use crate::{print_debug, print_info};

const THROTTLE_AXIS: usize = 1;
const TURN_AXIS: usize = 3;
const TRACK_SCALE: f32 = 200.0;
const STOP_BUTTON: usize = 0;

/// Mixes the throttle and turn axes into (left, right) track speeds.
///
/// Pushing the throttle stick forward (negative) drives both tracks forward;
/// the turn stick slows down the track on the side it points to.
pub(crate) fn tank_drive(axes: &[f32]) -> (i32, i32) {
    let throttle = axes.get(THROTTLE_AXIS).copied().unwrap_or(0.0);
    let turn = axes.get(TURN_AXIS).copied().unwrap_or(0.0);
    let mut left = -throttle * TRACK_SCALE;
    let mut right = left;

    if turn < 0.0 {
        right *= 1.0 + 2.0 * turn;
    } else if turn > 0.0 {
        left *= 1.0 - 2.0 * turn;
    }
    (left as i32, right as i32)
}

/// Handlers that report every input and stop on release of button 0.
pub(crate) fn example_handlers(running: RunFlag) -> Handlers {
    Handlers::new()
        .on_axis(|state: &DeviceState| {
            let (left, right) = tank_drive(state.axes());
            print_info!("tracks {left} {right}");
            print_info!("axes {:?}", state.axes());
            Ok(())
        })
        .on_hat(|state: &DeviceState| {
            let hats: Vec<String> = state.hats().iter().map(ToString::to_string).collect();
            print_info!("hats [{}]", hats.join(", "));
            Ok(())
        })
        .on_button_press(|state: &DeviceState| {
            print_info!("down {:?}", state.pressed_buttons().collect::<Vec<_>>());
            Ok(())
        })
        .on_button_release(move |_state: &DeviceState, button| {
            print_debug!("up {button}");
            if button == STOP_BUTTON {
                running.stop();
                print_info!("{}", "=======END".bold());
            }
            Ok(())
        })
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use padwatch_gamepad::mock::MockDevice;
    use padwatch_monitor::{ControllerMonitor, MonitorConfig};

    use super::*;

    #[test]
    fn tank_drive_straight_ahead() {
        assert_eq!(tank_drive(&[0.0, -0.5, 0.0, 0.0]), (100, 100));
        assert_eq!(tank_drive(&[0.0, 0.5, 0.0, 0.0]), (-100, -100));
    }

    #[test]
    fn tank_drive_turn_slows_inner_track() {
        assert_eq!(tank_drive(&[0.0, -0.5, 0.0, -0.5]), (100, 0));
        assert_eq!(tank_drive(&[0.0, -0.5, 0.0, 0.5]), (0, 100));
        assert_eq!(tank_drive(&[0.0, 0.5, 0.0, -0.5]), (-100, 0));
        assert_eq!(tank_drive(&[0.0, 0.5, 0.0, 0.5]), (0, -100));
    }

    #[test]
    fn tank_drive_tolerates_few_axes() {
        assert_eq!(tank_drive(&[]), (0, 0));
        assert_eq!(tank_drive(&[0.3, -1.0]), (200, 200));
    }

    #[test]
    fn releasing_button_zero_stops() {
        let running = RunFlag::new();
        let device = MockDevice::new("pad", 4, 4, 1);
        let mut monitor = ControllerMonitor::new(
            device,
            MonitorConfig::default(),
            example_handlers(running.clone()),
        )
        .expect("valid config")
        .with_run_flag(running.clone());

        monitor.device_mut().press(1);
        monitor.device_mut().release(1);
        monitor.poll_at(Instant::now());
        assert!(running.is_running());

        monitor.device_mut().press(0);
        monitor.device_mut().release(0);
        monitor.poll_at(Instant::now());
        assert!(!running.is_running());
    }
}

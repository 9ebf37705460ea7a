use std::time::{Duration, Instant};

use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use padwatch_gamepad::mock::MockDevice;
use padwatch_monitor::{ControllerMonitor, Handlers, MonitorConfig};

fn build_monitor(repeat_ms: u64) -> ControllerMonitor<MockDevice> {
    let handlers = Handlers::new()
        .on_axis(|s| {
            black_box(s.axes());
            Ok(())
        })
        .on_button_press(|s| {
            black_box(s.buttons());
            Ok(())
        })
        .on_button_release(|_, button| {
            black_box(button);
            Ok(())
        });
    let config = MonitorConfig::default().with_repeat_interval_ms(repeat_ms);
    ControllerMonitor::new(MockDevice::new("bench", 6, 16, 1), config, handlers)
        .expect("valid config")
}

pub fn bench_dispatch(c: &mut Criterion) {
    let mut m = build_monitor(0);
    c.bench_function("poll_axes_and_buttons", |b| {
        b.iter(|| {
            let dev = m.device_mut();
            dev.move_axes(&[0.3, -0.7, 0.01, 0.0, 0.9, -0.02]);
            dev.press(3);
            dev.release(3);
            dev.move_axes(&[0.0; 6]);
            black_box(m.poll_at(Instant::now()))
        })
    });

    let mut m = build_monitor(30);
    let mut now = Instant::now();
    m.device_mut().press(5);
    m.poll_at(now);
    c.bench_function("poll_button_repeat", |b| {
        b.iter(|| {
            now += Duration::from_millis(30);
            black_box(m.poll_at(now))
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);

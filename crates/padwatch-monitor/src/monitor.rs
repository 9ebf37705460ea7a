use std::time::{Duration, Instant};

use padwatch_gamepad::{Backend, Device, HatDirection, RawEvent, RepeatKind, Result};

use crate::config::MonitorConfig;
use crate::flag::RunFlag;
use crate::handlers::{HandlerResult, Handlers};
use crate::repeat::RepeatTimers;
use crate::state::DeviceState;

/// How a raw event is handled by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    AxisMotion,
    HatMotion,
    ButtonDown,
    ButtonUp(usize),
    /// Expected shutdown request: quit or removal of the monitored device.
    Terminate,
    Other,
}

impl EventClass {
    pub fn of(event: &RawEvent) -> Self {
        match event {
            RawEvent::AxisMotion { .. } | RawEvent::Repeat(RepeatKind::Axes) => {
                EventClass::AxisMotion
            }
            RawEvent::HatMotion { .. } | RawEvent::Repeat(RepeatKind::Hats) => {
                EventClass::HatMotion
            }
            RawEvent::ButtonDown { .. } | RawEvent::Repeat(RepeatKind::Buttons) => {
                EventClass::ButtonDown
            }
            RawEvent::ButtonUp { button } => EventClass::ButtonUp(usize::from(*button)),
            RawEvent::Quit | RawEvent::DeviceRemoved => EventClass::Terminate,
            RawEvent::Unknown(_) => EventClass::Other,
        }
    }
}

/// Polls one device, keeps its normalized state and dispatches changes to
/// [`Handlers`], re-delivering held inputs at the configured repeat interval.
///
/// Everything runs on the caller's thread inside [`poll`](Self::poll).
pub struct ControllerMonitor<D: Device> {
    device: D,
    config: MonitorConfig,
    state: DeviceState,
    timers: RepeatTimers,
    handlers: Handlers,
    running: RunFlag,
}

impl<D: Device> ControllerMonitor<D> {
    /// Opens `config.device_index` through `backend` and builds a monitor for it.
    pub fn init<B>(backend: &mut B, config: MonitorConfig, handlers: Handlers) -> Result<Self>
    where
        B: Backend<Device = D>,
    {
        config.validate()?;
        let device = backend.open(config.device_index)?;
        Self::new(device, config, handlers)
    }

    /// Builds a monitor around an already opened device.
    pub fn new(device: D, config: MonitorConfig, handlers: Handlers) -> Result<Self> {
        config.validate()?;
        let state = DeviceState::for_device(&device, config.deadzone);
        let timers = RepeatTimers::new(config.repeat_interval);
        log::info!("joystick name: {}", device.name());
        log::info!("number of buttons: {}", device.button_count());
        log::info!("number of axes: {}", device.axis_count());
        log::info!("number of hats: {}", device.hat_count());
        Ok(Self {
            device,
            config,
            state,
            timers,
            handlers,
            running: RunFlag::new(),
        })
    }

    /// Shares an externally created run flag, e.g. one captured by handlers.
    pub fn with_run_flag(mut self, flag: RunFlag) -> Self {
        self.running = flag;
        self
    }

    pub fn set_handlers(&mut self, handlers: Handlers) {
        self.handlers = handlers;
    }

    pub fn device_name(&self) -> &str {
        self.device.name()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn repeat_interval(&self) -> Duration {
        self.config.repeat_interval
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn sample_axes(&mut self) -> &[f32] {
        self.state.sample_axes(&self.device)
    }

    pub fn sample_buttons(&mut self) -> &[bool] {
        self.state.sample_buttons(&self.device)
    }

    pub fn sample_hats(&mut self) -> &[HatDirection] {
        self.state.sample_hats(&self.device)
    }

    pub fn axes_neutral(&self) -> bool {
        self.state.axes_neutral()
    }

    pub fn buttons_neutral(&self) -> bool {
        self.state.buttons_neutral()
    }

    pub fn hats_neutral(&self) -> bool {
        self.state.hats_neutral()
    }

    pub fn repeat_armed(&self, kind: RepeatKind) -> bool {
        self.timers.is_armed(kind)
    }

    pub fn run_flag(&self) -> RunFlag {
        self.running.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    pub fn set_running(&self, running: bool) {
        self.running.set(running);
    }

    /// Drains pending device events and due repeats, dispatching them in order.
    /// Returns the number of events handled.
    pub fn poll(&mut self) -> usize {
        self.poll_at(Instant::now())
    }

    /// Same as [`poll`](Self::poll) with an explicit clock.
    pub fn poll_at(&mut self, now: Instant) -> usize {
        let events = self.device.poll_events();
        for event in &events {
            self.dispatch(event, now);
        }
        // Timers are checked after device events so a release in this batch
        // cancels the repeat before it is delivered.
        let mut repeats = Vec::new();
        self.timers.drain_due(now, |kind| repeats.push(RawEvent::Repeat(kind)));
        for event in &repeats {
            self.dispatch(event, now);
        }
        events.len() + repeats.len()
    }

    fn dispatch(&mut self, event: &RawEvent, now: Instant) {
        match EventClass::of(event) {
            EventClass::AxisMotion => {
                self.state.sample_axes(&self.device);
                if self.state.axes_neutral() {
                    self.disarm(RepeatKind::Axes);
                    return;
                }
                if let Some(handler) = self.handlers.axis.as_mut() {
                    report("axis", handler(&self.state));
                }
                self.arm(RepeatKind::Axes, now);
            }
            EventClass::HatMotion => {
                self.state.sample_hats(&self.device);
                if self.state.hats_neutral() {
                    self.disarm(RepeatKind::Hats);
                    return;
                }
                if let Some(handler) = self.handlers.hat.as_mut() {
                    report("hat", handler(&self.state));
                }
                self.arm(RepeatKind::Hats, now);
            }
            EventClass::ButtonDown => {
                self.state.sample_buttons(&self.device);
                if let Some(handler) = self.handlers.button_press.as_mut() {
                    report("button press", handler(&self.state));
                }
                self.arm(RepeatKind::Buttons, now);
            }
            EventClass::ButtonUp(button) => {
                self.state.sample_buttons(&self.device);
                if let Some(handler) = self.handlers.button_release.as_mut() {
                    report("button release", handler(&self.state, button));
                }
                // Repeats follow "any button held", so only the last release cancels.
                if self.state.buttons_neutral() {
                    self.disarm(RepeatKind::Buttons);
                }
            }
            EventClass::Terminate => {
                log::info!("received {event:?}, stopping");
                self.running.stop();
            }
            EventClass::Other => {
                log::info!("unhandled event: {event:?}");
            }
        }
    }

    fn arm(&mut self, kind: RepeatKind, now: Instant) {
        if self.timers.arm(kind, now) {
            log::debug!("repeat armed for {kind} every {:?}", self.timers.interval());
        }
    }

    fn disarm(&mut self, kind: RepeatKind) {
        if self.timers.disarm(kind) {
            log::debug!("repeat disarmed for {kind}");
        }
    }
}

fn report(handler: &str, result: HandlerResult) {
    if let Err(e) = result {
        log::error!("{handler} handler failed: {e}");
    }
}

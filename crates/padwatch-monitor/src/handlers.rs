use std::fmt;

use crate::state::DeviceState;

/// Error returned by a handler. It is logged and dispatch continues.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by every handler.
pub type HandlerResult = Result<(), HandlerError>;

type StateHandler = Box<dyn FnMut(&DeviceState) -> HandlerResult>;
type ReleaseHandler = Box<dyn FnMut(&DeviceState, usize) -> HandlerResult>;

/// Application callbacks. Every handler is optional; unset ones are skipped.
///
/// ```
/// use padwatch_monitor::Handlers;
///
/// let handlers = Handlers::new()
///     .on_button_press(|state| {
///         println!("held: {:?}", state.pressed_buttons().collect::<Vec<_>>());
///         Ok(())
///     })
///     .on_button_release(|_, button| {
///         println!("released {button}");
///         Ok(())
///     });
/// assert!(handlers.has_button_release());
/// ```
#[derive(Default)]
pub struct Handlers {
    pub(crate) axis: Option<StateHandler>,
    pub(crate) hat: Option<StateHandler>,
    pub(crate) button_press: Option<StateHandler>,
    pub(crate) button_release: Option<ReleaseHandler>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the filtered state while any axis is outside the deadzone.
    pub fn on_axis<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&DeviceState) -> HandlerResult + 'static,
    {
        self.axis = Some(Box::new(handler));
        self
    }

    /// Called while any hat is off center.
    pub fn on_hat<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&DeviceState) -> HandlerResult + 'static,
    {
        self.hat = Some(Box::new(handler));
        self
    }

    /// Called on every press and on every button repeat.
    pub fn on_button_press<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&DeviceState) -> HandlerResult + 'static,
    {
        self.button_press = Some(Box::new(handler));
        self
    }

    /// Called with the index of the button that was released.
    pub fn on_button_release<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&DeviceState, usize) -> HandlerResult + 'static,
    {
        self.button_release = Some(Box::new(handler));
        self
    }

    pub fn has_axis(&self) -> bool {
        self.axis.is_some()
    }

    pub fn has_hat(&self) -> bool {
        self.hat.is_some()
    }

    pub fn has_button_press(&self) -> bool {
        self.button_press.is_some()
    }

    pub fn has_button_release(&self) -> bool {
        self.button_release.is_some()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("axis", &self.has_axis())
            .field("hat", &self.has_hat())
            .field("button_press", &self.has_button_press())
            .field("button_release", &self.has_button_release())
            .finish()
    }
}

use std::time::{Duration, Instant};

use super::timer::{Scheduler, TimerHandle, TimerTarget};
use crate::util::is_on;
use crate::ButtonId;

/// How a button's lit state reacts to presses and releases.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewFunction {
    /// Every press flips the light, releases are ignored
    Toggle,
    /// Lit exactly while held down
    Trigger,
    /// A press starts blinking, the next press stops it and turns the light off
    Blink,
}

impl Default for ViewFunction {
    fn default() -> Self {
        Self::Toggle
    }
}

impl std::str::FromStr for ViewFunction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toggle" => Ok(Self::Toggle),
            "trigger" => Ok(Self::Trigger),
            "blink" => Ok(Self::Blink),
            _ => Err(crate::Error::InvalidViewFunction(s.to_owned())),
        }
    }
}

impl std::fmt::Display for ViewFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Toggle => "toggle",
            Self::Trigger => "trigger",
            Self::Blink => "blink",
        })
    }
}

/// A single grid button.
///
/// Buttons are owned by a [`crate::Surface`] and come into existence the first time their id is
/// referenced. The view function and blink interval are copied from the surface defaults at
/// that point.
#[derive(Debug)]
pub struct Button {
    id: ButtonId,
    state: bool,
    view_function: ViewFunction,
    blink_interval: Duration,
    // Some while blinking
    blink_timer: Option<TimerHandle>,
}

impl Button {
    pub(crate) fn new(id: ButtonId, view_function: ViewFunction, blink_interval: Duration) -> Self {
        Self {
            id,
            state: false,
            view_function,
            blink_interval,
            blink_timer: None,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Whether the button is lit
    pub fn state(&self) -> bool {
        self.state
    }

    pub fn view_function(&self) -> ViewFunction {
        self.view_function
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_timer.is_some()
    }

    pub fn blink_interval(&self) -> Duration {
        self.blink_interval
    }

    /// Feed a raw press value (a velocity; zero means release) through the view function.
    pub(crate) fn press(&mut self, value: u8, scheduler: &mut Scheduler, now: Instant) {
        match self.view_function {
            ViewFunction::Trigger => self.state = is_on(value),
            ViewFunction::Toggle => {
                if is_on(value) {
                    self.state = !self.state;
                }
            }
            ViewFunction::Blink => {
                if !is_on(value) {
                    return;
                }
                match self.blink_timer.take() {
                    Some(handle) => {
                        scheduler.cancel(handle);
                        self.state = false;
                    }
                    None => {
                        let target = TimerTarget::Blink(self.id);
                        self.blink_timer = Some(scheduler.start(target, self.blink_interval, now));
                    }
                }
            }
        }
    }

    /// Called when a blink timer fires. Flips the light if `handle` is this button's live
    /// timer, and returns whether it did.
    pub(crate) fn blink_tick(&mut self, handle: TimerHandle) -> bool {
        if self.blink_timer != Some(handle) {
            return false;
        }
        self.state = !self.state;
        true
    }

    /// Overwrite the lit state without going through the view function
    pub(crate) fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Change the blink interval. A running timer keeps its phase and uses the new period
    /// from its next firing on.
    pub(crate) fn set_blink_interval(&mut self, interval: Duration, scheduler: &mut Scheduler) {
        self.blink_interval = interval;
        if let Some(handle) = self.blink_timer {
            scheduler.set_period(handle, interval);
        }
    }

    /// Stop blinking and turn off. Safe to call any number of times.
    pub(crate) fn clear(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.blink_timer.take() {
            scheduler.cancel(handle);
        }
        self.state = false;
    }
}

use std::time::Duration;

use super::ViewFunction;

/// Defaults and policies of a [`crate::Surface`].
///
/// With the `serde` feature enabled, this can be loaded from any serde format. Missing fields
/// take their default values.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceConfig {
    /// View function given to buttons when they're created
    pub view_function: ViewFunction,
    /// Blink interval given to buttons when they're created
    pub blink_interval_ms: u64,
    /// Send the LED state after every mutating operation. Presses skip this while continuous
    /// render is running.
    pub resync_on_press: bool,
    /// Period of continuous render
    pub render_interval_ms: u64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            view_function: ViewFunction::Toggle,
            blink_interval_ms: 250,
            resync_on_press: true,
            render_interval_ms: 50,
        }
    }
}

impl SurfaceConfig {
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }

    pub fn with_view_function(mut self, view_function: ViewFunction) -> Self {
        self.view_function = view_function;
        self
    }

    pub fn with_blink_interval_ms(mut self, ms: u64) -> Self {
        self.blink_interval_ms = ms;
        self
    }
}

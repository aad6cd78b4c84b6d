use crate::text::TextFormat;
use core::time::Duration;

/// Where the running time and the last split are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub title: TextFormat,
    pub split: TextFormat,
    /// Minimum time between two redraws of a running clock
    pub redraw_interval: Duration,
}

impl Layout {
    /// Layout for the 178x128 EV3 brick display
    pub fn ev3() -> Self {
        Self {
            title: TextFormat::new(16, 16, 3),
            split: TextFormat::new(16, 48, 2),
            redraw_interval: Duration::from_millis(73),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::ev3()
    }
}

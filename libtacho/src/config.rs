use crate::rate::{RateConverter, TickClock};

/// Shown instead of a number when the measured interval was zero ticks long.
pub const UNAVAILABLE_TEXT: &str = "---";

/// Fixed at build time. Nothing here is persisted or changed at runtime.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TachoConfig {
    pub converter: RateConverter,
    /// Display line the rate is written to.
    pub display_line: u8,
    pub unavailable_text: &'static str,
}

impl TachoConfig {
    pub const fn new(converter: RateConverter) -> Self {
        Self {
            converter,
            display_line: 0,
            unavailable_text: UNAVAILABLE_TEXT,
        }
    }

    /// One pulse per revolution, counted by the given clock.
    pub const fn from_clock(clock: TickClock) -> Self {
        Self::new(RateConverter::from_clock(clock, 1))
    }

    pub const fn with_display_line(self, display_line: u8) -> Self {
        Self {
            display_line,
            ..self
        }
    }

    pub const fn with_unavailable_text(self, unavailable_text: &'static str) -> Self {
        Self {
            unavailable_text,
            ..self
        }
    }
}

impl Default for TachoConfig {
    fn default() -> Self {
        Self::new(RateConverter::default())
    }
}

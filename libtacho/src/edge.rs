use core::convert::Infallible;

use embedded_hal::digital::v2::InputPin;

use crate::hal::EdgeSource;

/// Falling-edge detection in software, for sensor lines wired to a pin that
/// has no edge-latching hardware behind it.
///
/// The line is only looked at when [`EdgeSource::is_pending`] is called, so a
/// pulse shorter than the polling period can be missed.
pub struct PolledEdge<P> {
    pin: P,
    last_high: bool,
    pending: bool,
}

fn is_high<P: InputPin<Error = Infallible>>(pin: &P) -> bool {
    match pin.is_high() {
        Ok(high) => high,
        Err(e) => match e {},
    }
}

impl<P: InputPin<Error = Infallible>> PolledEdge<P> {
    pub fn new(pin: P) -> Self {
        let last_high = is_high(&pin);
        Self {
            pin,
            last_high,
            pending: false,
        }
    }

    fn sample(&mut self) {
        let high = is_high(&self.pin);
        if self.last_high && !high {
            self.pending = true;
        }
        self.last_high = high;
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin<Error = Infallible>> EdgeSource for PolledEdge<P> {
    fn is_pending(&mut self) -> bool {
        self.sample();
        self.pending
    }

    fn clear(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::VecDeque};

    /// Plays back a list of levels, then holds the last one.
    struct ScriptedPin {
        levels: RefCell<VecDeque<bool>>,
    }

    impl ScriptedPin {
        fn new(levels: &[bool]) -> Self {
            Self {
                levels: RefCell::new(levels.iter().copied().collect()),
            }
        }
    }

    impl InputPin for ScriptedPin {
        type Error = Infallible;

        fn is_high(&self) -> Result<bool, Self::Error> {
            let mut levels = self.levels.borrow_mut();
            let level = if levels.len() > 1 {
                levels.pop_front().unwrap_or(true)
            } else {
                levels.front().copied().unwrap_or(true)
            };
            Ok(level)
        }

        fn is_low(&self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn latches_falling_edge_until_cleared() {
        // idle high, falls, comes back up
        let mut edge = PolledEdge::new(ScriptedPin::new(&[true, true, false, true, true]));
        assert!(!edge.is_pending());
        assert!(edge.is_pending());
        assert!(edge.is_pending());
        edge.clear();
        assert!(!edge.is_pending());
    }

    #[test]
    fn ignores_rising_edge() {
        let mut edge = PolledEdge::new(ScriptedPin::new(&[false, false, true, true]));
        for _ in 0..5 {
            assert!(!edge.is_pending());
        }
    }

    #[test]
    fn line_held_low_does_not_retrigger() {
        let mut edge = PolledEdge::new(ScriptedPin::new(&[true, false, false]));
        assert!(edge.is_pending());
        edge.clear();
        for _ in 0..5 {
            assert!(!edge.is_pending());
        }
    }

    #[test]
    fn line_low_at_startup_is_not_an_edge() {
        let mut edge = PolledEdge::new(ScriptedPin::new(&[false, false, true, false]));
        assert!(!edge.is_pending());
        assert!(!edge.is_pending());
        assert!(edge.is_pending());
    }

    #[test]
    fn wait_for_edge_returns_on_edge() {
        let mut edge = PolledEdge::new(ScriptedPin::new(&[true, true, true, false]));
        edge.wait_for_edge();
        assert!(edge.is_pending());
    }
}

use crate::{error::Error, hal::TickCount};

/// Clock feeding the tick counter: a source frequency and the prescaler that
/// divides it down.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    pub source_hz: u32,
    pub prescaler: u32,
}

impl TickClock {
    /// 20 MHz system clock divided by 1024, one tick every 51.2 µs.
    pub const AVR_20MHZ_DIV1024: Self = Self::new(20_000_000, 1024);
    /// 16 MHz HFCLK with a prescaler of 2^4, one tick every microsecond.
    pub const NRF_TIMER_1MHZ: Self = Self::new(16_000_000, 16);

    pub const fn new(source_hz: u32, prescaler: u32) -> Self {
        assert!(prescaler > 0, "prescaler must divide by at least 1");
        Self {
            source_hz,
            prescaler,
        }
    }

    pub const fn ticks_per_minute(&self) -> u64 {
        self.source_hz as u64 * 60 / self.prescaler as u64
    }
}

/// Outcome of converting one measured interval.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    /// Revolutions per minute, truncated toward zero.
    Rpm(u32),
    /// The interval read back as zero ticks and no rate can be derived.
    Unavailable,
}

/// Turns ticks-per-revolution into revolutions-per-minute.
///
/// `rpm = K / ticks`, where `K` is the number of ticks in one minute divided
/// by the number of sensor pulses per revolution.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConverter {
    k: u32,
}

impl RateConverter {
    pub const fn new(k: u32) -> Self {
        Self { k }
    }

    /// Derives `K` from the counter clock. Saturates at `u32::MAX` for clocks
    /// too fast to express a minute in 32 bits.
    pub const fn from_clock(clock: TickClock, pulses_per_revolution: u32) -> Self {
        assert!(pulses_per_revolution > 0, "need at least one pulse per revolution");
        let k = clock.ticks_per_minute() / pulses_per_revolution as u64;
        let k = if k > u32::MAX as u64 { u32::MAX } else { k as u32 };
        Self { k }
    }

    /// The scale constant `K`.
    pub const fn constant(&self) -> u32 {
        self.k
    }

    /// Integer division, no rounding. Zero ticks is reported instead of faulting.
    pub fn convert(&self, ticks: TickCount) -> Result<u32, Error> {
        self.k.checked_div(ticks).ok_or(Error::DegenerateInterval)
    }

    pub fn rate(&self, ticks: TickCount) -> Rate {
        match self.convert(ticks) {
            Ok(rpm) => Rate::Rpm(rpm),
            Err(_) => Rate::Unavailable,
        }
    }
}

impl Default for RateConverter {
    /// One pulse per revolution on a 1 MHz counter.
    fn default() -> Self {
        Self::from_clock(TickClock::NRF_TIMER_1MHZ, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVR: RateConverter = RateConverter::from_clock(TickClock::AVR_20MHZ_DIV1024, 1);

    #[test]
    fn avr_clock_matches_legacy_constant() {
        // 60 * 10_000_000 / 512
        assert_eq!(AVR.constant(), 1_171_875);
        assert_eq!(RateConverter::default().constant(), 60_000_000);
    }

    #[test]
    fn convert_truncates_toward_zero() {
        // 1_171_875 / 23_438 = 49.998...
        assert_eq!(AVR.convert(23_438), Ok(49));
        assert_eq!(AVR.convert(23_437), Ok(50));
        // 1_171_875 / 11_719 = 99.997...
        assert_eq!(AVR.convert(11_719), Ok(99));
        assert_eq!(AVR.convert(11_718), Ok(100));
    }

    #[test]
    fn convert_matches_plain_division() {
        let k = AVR.constant();
        for ticks in [1, 2, 3, 7, 512, 19_531, 65_535, 1_171_875, 1_171_876, u32::MAX] {
            assert_eq!(AVR.convert(ticks), Ok(k / ticks));
        }
    }

    #[test]
    fn zero_ticks_is_handled() {
        assert_eq!(AVR.convert(0), Err(Error::DegenerateInterval));
        assert_eq!(AVR.rate(0), Rate::Unavailable);
        assert_eq!(AVR.rate(11_718), Rate::Rpm(100));
    }

    #[test]
    fn pulses_per_revolution_divide_the_constant() {
        let two_magnets = RateConverter::from_clock(TickClock::NRF_TIMER_1MHZ, 2);
        assert_eq!(two_magnets.constant(), 30_000_000);
        // 20 ms between pulses, two pulses per turn: 1500 RPM
        assert_eq!(two_magnets.convert(20_000), Ok(1_500));
    }

    #[test]
    fn fast_clock_saturates() {
        let fast = RateConverter::from_clock(TickClock::new(u32::MAX, 1), 1);
        assert_eq!(fast.constant(), u32::MAX);
    }
}

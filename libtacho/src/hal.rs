//! Interfaces to the three pieces of hardware the measurement loop drives.

use crate::error::Error;

/// Number of counter ticks between two sensor edges.
///
/// Counters narrower than 32 bits wrap at their own width; no rollover is
/// tracked, so an interval longer than the counter range reads back modulo
/// that range.
pub type TickCount = u32;

/// A latched falling-edge flag on the sensor input.
pub trait EdgeSource {
    /// Returns `true` once a falling edge was seen since the last [`clear`].
    /// Observing the flag does not clear it.
    ///
    /// [`clear`]: EdgeSource::clear
    fn is_pending(&mut self) -> bool;

    /// Drops the pending edge so the next transition can be detected.
    fn clear(&mut self);

    /// Spins until an edge is pending. There is no timeout: if the shaft never
    /// turns, this never returns.
    fn wait_for_edge(&mut self) {
        while !self.is_pending() {}
    }
}

/// A free-running counter ticking at a fixed, known rate while started.
pub trait TickCounter {
    /// Sets the accumulated ticks to zero.
    fn reset(&mut self);
    /// Starts counting from a clean prescaler edge.
    fn start(&mut self);
    /// Stops counting. The value is stable afterwards.
    fn stop(&mut self);
    /// Accumulated ticks. Only meaningful while stopped.
    fn read(&self) -> TickCount;
}

/// Sink for the rendered rate.
pub trait CharDisplay {
    fn init(&mut self) -> Result<(), Error>;
    fn clear(&mut self) -> Result<(), Error>;
    fn clear_line(&mut self, line: u8) -> Result<(), Error>;
    /// Writes at the current cursor position, which is the start of the line
    /// after [`clear_line`](CharDisplay::clear_line).
    fn write_string(&mut self, text: &str) -> Result<(), Error>;
}

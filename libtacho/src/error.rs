#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The counter read back zero ticks, usually because it wrapped exactly.
    DegenerateInterval,
    /// Attempted to read the counter while it was still counting.
    CounterRunning,
    /// The display rejected a command or the bus to it failed.
    Display,
}

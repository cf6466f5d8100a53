use crate::{config::TachoConfig, counter::ElapsedCounter, hal::TickCount, rate::Rate};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TachoSMState {
    /// Counter stopped and zeroed, waiting for the edge that opens an interval.
    Idle,
    /// Counter running, waiting for the edge that closes the interval.
    Armed,
    /// Counter stopped, the interval's ticks are ready to be converted.
    Measured(TickCount),
}

/// One completed revolution measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub ticks: TickCount,
    pub rate: Rate,
}

pub struct TachoSM<E, C, D> {
    pub(super) state: TachoSMState,
    pub(super) edge: E,
    pub(super) counter: ElapsedCounter<C>,
    pub(super) display: D,
    pub(super) config: TachoConfig,
}

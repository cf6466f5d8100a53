//! Hardware-independent core of the tachometer firmware.
//!
//! The shaft sensor produces one falling edge per revolution. The measurement
//! loop arms a free-running tick counter on one edge, disarms it on the next
//! and converts the elapsed ticks to revolutions per minute, which are then
//! written to a character display.
//!
//! Everything touching registers lives behind the traits in [`hal`], so the
//! same loop runs on the target and against the simulated parts in `sim` (feature `sim`).
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod counter;
pub mod edge;
pub mod error;
pub mod format;
pub mod hal;
pub mod rate;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod state_machine;

pub use config::TachoConfig;
pub use counter::{ElapsedCounter, TimerState};
pub use edge::PolledEdge;
pub use error::Error;
pub use hal::{CharDisplay, EdgeSource, TickCount, TickCounter};
pub use rate::{Rate, RateConverter, TickClock};
pub use state_machine::{Reading, TachoSM, TachoSMState};

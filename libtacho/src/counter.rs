use crate::{
    error::Error,
    hal::{TickCount, TickCounter},
};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Stopped,
}

/// Bookkeeping around a [`TickCounter`]: keeps track of whether it runs and
/// whether it was reset since the last capture.
pub struct ElapsedCounter<C> {
    counter: C,
    state: TimerState,
    fresh: bool,
}

impl<C: TickCounter> ElapsedCounter<C> {
    /// Takes over the counter, stopping and zeroing it.
    pub fn new(mut counter: C) -> Self {
        counter.stop();
        counter.reset();
        Self {
            counter,
            state: TimerState::Stopped,
            fresh: true,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Starts timing an interval. A counter that was not zeroed since its last
    /// capture is reset first, so the interval always starts at tick zero.
    pub fn arm(&mut self) {
        if self.state == TimerState::Running {
            return;
        }
        if !self.fresh {
            self.counter.reset();
        }
        self.counter.start();
        self.state = TimerState::Running;
        self.fresh = false;
    }

    /// Stops the counter and captures its value, then zeroes it for the next
    /// interval.
    pub fn disarm(&mut self) -> TickCount {
        self.counter.stop();
        self.state = TimerState::Stopped;
        let ticks = self.counter.read();
        self.counter.reset();
        self.fresh = true;
        ticks
    }

    /// Reads the stopped counter without zeroing it.
    pub fn read(&self) -> Result<TickCount, Error> {
        match self.state {
            TimerState::Stopped => Ok(self.counter.read()),
            TimerState::Running => Err(Error::CounterRunning),
        }
    }

    pub fn inner(&self) -> &C {
        &self.counter
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.counter
    }
}

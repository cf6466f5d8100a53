mod types;

pub use types::{Reading, TachoSM, TachoSMState};

use crate::{
    config::TachoConfig,
    counter::ElapsedCounter,
    error::Error,
    format::render_rate,
    hal::{CharDisplay, EdgeSource, TickCounter},
    rate::Rate,
};

impl<E, C, D> TachoSM<E, C, D>
where
    E: EdgeSource,
    C: TickCounter,
    D: CharDisplay,
{
    /// Takes ownership of the hardware. The counter is stopped and zeroed; the
    /// edge flag is left as it is, so an edge latched before startup opens the
    /// first interval.
    pub fn new(edge: E, counter: C, display: D, config: TachoConfig) -> Self {
        Self {
            state: TachoSMState::Idle,
            edge,
            counter: ElapsedCounter::new(counter),
            display,
            config,
        }
    }

    /// Initializes and blanks the display. Call once before the first tick.
    pub fn init_display(&mut self) -> Result<(), Error> {
        self.display.init()?;
        self.display.clear()
    }

    /// Executes at most one transition. Returns `WouldBlock` while waiting for
    /// an edge, and the reading once an interval has been converted and shown.
    ///
    /// The flag is cleared when an interval closes, before the reading is
    /// shown. An edge arriving while the display is written stays latched and
    /// opens the next interval only when the loop is back in `Idle`, so that
    /// interval starts late and its reading comes out high. This matters once
    /// a revolution is not much longer than a display update.
    pub fn try_tick(&mut self) -> nb::Result<Option<Reading>, Error> {
        match self.state {
            TachoSMState::Idle => {
                if !self.edge.is_pending() {
                    return Err(nb::Error::WouldBlock);
                }
                self.counter.arm();
                self.edge.clear();
                trace!("Interval opened");

                self.state = TachoSMState::Armed;
                Ok(None)
            }
            TachoSMState::Armed => {
                if !self.edge.is_pending() {
                    return Err(nb::Error::WouldBlock);
                }
                let ticks = self.counter.disarm();
                self.edge.clear();
                trace!("Interval closed after {} ticks", ticks);

                self.state = TachoSMState::Measured(ticks);
                Ok(None)
            }
            TachoSMState::Measured(ticks) => {
                // Whatever the display does, the next interval starts from Idle.
                self.state = TachoSMState::Idle;

                let rate = self.config.converter.rate(ticks);
                if rate == Rate::Unavailable {
                    warn!("Counter read zero ticks, rate unavailable");
                }
                self.show(rate)?;

                Ok(Some(Reading { ticks, rate }))
            }
        }
    }

    /// Executes one transition, spinning until the edge it needs arrives.
    pub fn tick(&mut self) -> Result<Option<Reading>, Error> {
        nb::block!(self.try_tick())
    }

    /// Runs a full cycle: both edges, conversion and display.
    pub fn measure(&mut self) -> Result<Reading, Error> {
        loop {
            if let Some(reading) = self.tick()? {
                return Ok(reading);
            }
        }
    }

    /// Measures forever. Errors are logged and the next cycle starts normally.
    pub fn run(&mut self) -> ! {
        loop {
            match self.tick() {
                Ok(Some(reading)) => info!("{:?}", reading),
                Ok(None) => {}
                Err(e) => error!("Tachometer cycle failed: {:?}", e),
            }
        }
    }

    fn show(&mut self, rate: Rate) -> Result<(), Error> {
        let text = render_rate(rate, self.config.unavailable_text);
        self.display.clear_line(self.config.display_line)?;
        self.display.write_string(&text)
    }

    pub fn state(&self) -> TachoSMState {
        self.state
    }

    pub fn config(&self) -> &TachoConfig {
        &self.config
    }

    pub fn edge(&self) -> &E {
        &self.edge
    }

    pub fn edge_mut(&mut self) -> &mut E {
        &mut self.edge
    }

    pub fn counter(&self) -> &ElapsedCounter<C> {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut C {
        self.counter.inner_mut()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

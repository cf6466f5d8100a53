//! Simulated sensor, counter and display for exercising the measurement loop
//! off target.
//!
//! Each part can share a [`Journal`] that records hardware operations in the
//! order they happened.

use core::cell::RefCell;

use heapless::{String, Vec};

use crate::{
    error::Error,
    hal::{CharDisplay, EdgeSource, TickCount, TickCounter},
};

pub const JOURNAL_LEN: usize = 128;
pub const DISPLAY_LINES: usize = 2;
pub const DISPLAY_COLUMNS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EdgeCleared,
    CounterReset,
    CounterStarted,
    CounterStopped,
    CounterRead(TickCount),
    DisplayInit,
    DisplayCleared,
    LineCleared(u8),
    TextWritten,
}

/// Ordered record of hardware operations. Events past the capacity are dropped.
pub struct Journal {
    events: RefCell<Vec<Event, JOURNAL_LEN>>,
}

impl Journal {
    pub const fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        let _ = self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event, JOURNAL_LEN> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

fn note(journal: Option<&Journal>, event: Event) {
    if let Some(journal) = journal {
        journal.record(event);
    }
}

/// Edge flag that is raised by the test through [`SimEdge::trigger`].
#[derive(Default)]
pub struct SimEdge<'a> {
    pending: bool,
    polls: u32,
    clears: u32,
    journal: Option<&'a Journal>,
}

impl<'a> SimEdge<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &'a Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    /// A falling edge on the simulated line.
    pub fn trigger(&mut self) {
        self.pending = true;
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl EdgeSource for SimEdge<'_> {
    fn is_pending(&mut self) -> bool {
        self.polls = self.polls.saturating_add(1);
        self.pending
    }

    fn clear(&mut self) {
        self.pending = false;
        self.clears += 1;
        note(self.journal, Event::EdgeCleared);
    }
}

/// Counter whose time only moves through [`SimCounter::advance`].
pub struct SimCounter<'a> {
    count: TickCount,
    mask: u64,
    running: bool,
    journal: Option<&'a Journal>,
}

impl<'a> SimCounter<'a> {
    /// A full 32-bit counter.
    pub fn new() -> Self {
        Self::with_width(32)
    }

    /// A counter that wraps after `bits` bits, like a 16-bit timer register.
    pub fn with_width(bits: u32) -> Self {
        let bits = bits.clamp(1, 32);
        Self {
            count: 0,
            mask: (1u64 << bits) - 1,
            running: false,
            journal: None,
        }
    }

    pub fn with_journal(self, journal: &'a Journal) -> Self {
        Self {
            journal: Some(journal),
            ..self
        }
    }

    /// Lets `ticks` ticks elapse. Has no effect on a stopped counter.
    pub fn advance(&mut self, ticks: u64) {
        if self.running {
            self.count = ((self.count as u64 + ticks) & self.mask) as TickCount;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for SimCounter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounter for SimCounter<'_> {
    fn reset(&mut self) {
        self.count = 0;
        note(self.journal, Event::CounterReset);
    }

    fn start(&mut self) {
        self.running = true;
        note(self.journal, Event::CounterStarted);
    }

    fn stop(&mut self) {
        self.running = false;
        note(self.journal, Event::CounterStopped);
    }

    fn read(&self) -> TickCount {
        note(self.journal, Event::CounterRead(self.count));
        self.count
    }
}

/// Character display keeping its contents in memory.
#[derive(Default)]
pub struct SimDisplay<'a> {
    lines: [String<DISPLAY_COLUMNS>; DISPLAY_LINES],
    cursor: usize,
    initialized: bool,
    writes: u32,
    failing: bool,
    journal: Option<&'a Journal>,
}

impl<'a> SimDisplay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &'a Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    /// Makes every following operation fail, as a disconnected display would.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn line(&self, line: usize) -> &str {
        self.lines.get(line).map(|l| l.as_str()).unwrap_or("")
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of successful `write_string` calls.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    fn check(&self) -> Result<(), Error> {
        if self.failing {
            Err(Error::Display)
        } else {
            Ok(())
        }
    }
}

impl CharDisplay for SimDisplay<'_> {
    fn init(&mut self) -> Result<(), Error> {
        self.check()?;
        self.initialized = true;
        note(self.journal, Event::DisplayInit);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.check()?;
        self.lines.iter_mut().for_each(|l| l.clear());
        self.cursor = 0;
        note(self.journal, Event::DisplayCleared);
        Ok(())
    }

    fn clear_line(&mut self, line: u8) -> Result<(), Error> {
        self.check()?;
        let index = line as usize;
        let target = self.lines.get_mut(index).ok_or(Error::Display)?;
        target.clear();
        self.cursor = index;
        note(self.journal, Event::LineCleared(line));
        Ok(())
    }

    fn write_string(&mut self, text: &str) -> Result<(), Error> {
        self.check()?;
        let target = &mut self.lines[self.cursor];
        for c in text.chars() {
            if target.push(c).is_err() {
                break;
            }
        }
        self.writes += 1;
        note(self.journal, Event::TextWritten);
        Ok(())
    }
}

//! Probe lifecycle state and the settle join.
//!
//! DESIGN
//! ======
//! The slide and the request progress independently; the fill may change
//! only once both have finished, whichever finishes first. `try_settle`
//! encodes that join so the component simply mirrors this state into the
//! DOM.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use crate::net::api::ProbeOutcome;
use crate::util::color::FillColor;

/// Lifecycle of the probe square. `Settled` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbePhase {
    #[default]
    Unstarted,
    /// Square exists in the document, still idle.
    Inserted,
    /// Fixed pause before motion and request begin.
    Delaying,
    /// Slide and request are in flight.
    Running,
    /// Fill reflects the request outcome.
    Settled,
}

/// Observable state of the probe square.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbeState {
    pub phase: ProbePhase,
    pub offset_x: f64,
    pub fill: FillColor,
    pub slide_done: bool,
    pub outcome: Option<ProbeOutcome>,
}

impl ProbeState {
    pub fn insert(&mut self) {
        if self.phase == ProbePhase::Unstarted {
            self.phase = ProbePhase::Inserted;
        }
    }

    pub fn begin_delay(&mut self) {
        if self.phase == ProbePhase::Inserted {
            self.phase = ProbePhase::Delaying;
        }
    }

    pub fn begin_run(&mut self) {
        if self.phase == ProbePhase::Delaying {
            self.phase = ProbePhase::Running;
        }
    }

    /// Record slide progress. Ignored outside `Running` and once the slide
    /// has finished, so the terminal position sticks.
    pub fn set_offset(&mut self, offset_x: f64) {
        if self.phase != ProbePhase::Running || self.slide_done {
            return;
        }
        self.offset_x = offset_x;
    }

    /// Pin the terminal offset and mark the slide finished.
    pub fn finish_slide(&mut self, terminal_offset: f64) {
        if self.slide_done {
            return;
        }
        self.offset_x = terminal_offset;
        self.slide_done = true;
    }

    /// Store the classified request result. First write wins.
    pub fn record_outcome(&mut self, outcome: ProbeOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    /// Apply the outcome's fill once both the slide and the request have
    /// finished. Returns true exactly once, on entry to `Settled`.
    pub fn try_settle(&mut self) -> bool {
        if self.phase == ProbePhase::Settled || !self.slide_done {
            return false;
        }
        let Some(outcome) = self.outcome else {
            return false;
        };
        self.fill = outcome.fill();
        self.phase = ProbePhase::Settled;
        true
    }
}

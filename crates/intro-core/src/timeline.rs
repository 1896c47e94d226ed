use crate::constants::*;
use crate::flyby::{Flyby, FlybyState};
use crate::reveal::REVEAL_TARGETS;
use smallvec::SmallVec;

/// A due choreography event. Cues are emitted exactly once each (the
/// flyby pair repeats every period) and carry no payload; the web layer
/// maps them onto style mutation and audio playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Fade in the reveal target at this index of [`REVEAL_TARGETS`].
    Reveal(usize),
    /// Begin the hyperspace render loop.
    HyperspaceStart,
    /// Apply [`crate::flyby::LAUNCH_PROGRAM`] to the sprite.
    FlybyLaunch,
    /// Apply [`crate::flyby::REST_PROGRAM`] to the sprite.
    FlybyRest,
}

pub type CueBatch = SmallVec<[Cue; 8]>;

/// Pure schedule of everything that happens after the start gesture,
/// polled with elapsed milliseconds instead of owning timers. Each poll
/// emits every newly due cue in deadline order, however coarse or uneven
/// the polling is, so choreography correctness does not depend on frame
/// pacing. The schedule never ends; flyby cycles repeat indefinitely.
#[derive(Debug)]
pub struct Choreographer {
    revealed: [bool; REVEAL_TARGETS.len()],
    hyperspace_started: bool,
    next_flyby_at: u64,
    flyby_rest_at: Option<u64>,
    flyby: Flyby,
}

impl Default for Choreographer {
    fn default() -> Self {
        Self::new()
    }
}

impl Choreographer {
    pub fn new() -> Self {
        Self {
            revealed: [false; REVEAL_TARGETS.len()],
            hyperspace_started: false,
            // The first flyby happens one full period in, not at t=0.
            next_flyby_at: FLYBY_PERIOD_MS,
            flyby_rest_at: None,
            flyby: Flyby::new(),
        }
    }

    pub fn flyby_state(&self) -> FlybyState {
        self.flyby.state()
    }

    pub fn hyperspace_started(&self) -> bool {
        self.hyperspace_started
    }

    /// Collect every cue whose deadline is at or before `elapsed_ms` and
    /// has not fired yet, appending them to `out` ordered by deadline.
    pub fn poll(&mut self, elapsed_ms: u64, out: &mut CueBatch) {
        let mut due: SmallVec<[(u64, Cue); 8]> = SmallVec::new();

        for (i, target) in REVEAL_TARGETS.iter().enumerate() {
            if !self.revealed[i] && elapsed_ms >= target.delay_ms {
                self.revealed[i] = true;
                due.push((target.delay_ms, Cue::Reveal(i)));
            }
        }

        if !self.hyperspace_started && elapsed_ms >= HYPERSPACE_DELAY_MS {
            self.hyperspace_started = true;
            due.push((HYPERSPACE_DELAY_MS, Cue::HyperspaceStart));
        }

        // Launches and rests alternate; under a coarse poll several whole
        // cycles can be due at once, so walk them in deadline order.
        loop {
            let rest_due = self.flyby_rest_at.filter(|&t| t <= elapsed_ms);
            let launch_due = self.next_flyby_at <= elapsed_ms;
            match (rest_due, launch_due) {
                (Some(rest_at), _) if rest_at <= self.next_flyby_at => {
                    self.flyby_rest_at = None;
                    self.flyby.rest();
                    due.push((rest_at, Cue::FlybyRest));
                }
                (_, true) => {
                    let launch_at = self.next_flyby_at;
                    self.flyby.launch();
                    self.flyby_rest_at = Some(launch_at + FLYBY_REST_AFTER_MS);
                    self.next_flyby_at = launch_at + FLYBY_PERIOD_MS;
                    due.push((launch_at, Cue::FlybyLaunch));
                }
                _ => break,
            }
        }

        // Stable sort keeps arming order for equal deadlines.
        due.sort_by_key(|&(at, _)| at);
        for (at, cue) in due {
            log::debug!("cue {:?} due at {}ms (polled at {}ms)", cue, at, elapsed_ms);
            out.push(cue);
        }
    }
}

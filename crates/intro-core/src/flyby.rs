use crate::constants::*;

/// Where the flyby sprite is in its cycle. It rests off-screen left and
/// traverses to off-screen right under a 6 s linear transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlybyState {
    #[default]
    AtRest,
    Flying,
}

/// One step of a flyby style program. The web layer interprets these
/// against the sprite element and its sound effect; keeping them as data
/// makes the exact ordering testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleStep {
    SetTransform(&'static str),
    SetTransition(&'static str),
    /// Turn transitions off so the following transform applies instantly.
    ClearTransition,
    /// Force a synchronous layout pass so the cleared transition takes
    /// effect before it is re-armed.
    ForceReflow,
    /// Restart the flyby sound effect from time zero.
    RestartSound,
}

/// Send the sprite off-screen right under the armed transition and
/// restart the sound.
pub const LAUNCH_PROGRAM: &[StyleStep] = &[
    StyleStep::SetTransform(FLYBY_EXIT_TRANSFORM),
    StyleStep::RestartSound,
];

/// Instantly snap the sprite back to rest, then re-arm the transition for
/// the next cycle. Order matters: the reflow must land between the reset
/// and the re-arm.
pub const REST_PROGRAM: &[StyleStep] = &[
    StyleStep::ClearTransition,
    StyleStep::SetTransform(FLYBY_REST_TRANSFORM),
    StyleStep::ForceReflow,
    StyleStep::SetTransition(FLYBY_TRANSITION),
];

#[derive(Debug, Default)]
pub struct Flyby {
    state: FlybyState,
}

impl Flyby {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlybyState {
        self.state
    }

    /// Launching while already Flying is accepted and simply restarts the
    /// sound; the timeline never does this (15 s period vs 7 s cycle) but
    /// the transition is kept total.
    pub fn launch(&mut self) -> &'static [StyleStep] {
        self.state = FlybyState::Flying;
        LAUNCH_PROGRAM
    }

    pub fn rest(&mut self) -> &'static [StyleStep] {
        self.state = FlybyState::AtRest;
        REST_PROGRAM
    }
}

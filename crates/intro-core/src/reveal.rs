use crate::constants::REVEAL_FADE_MS;

/// A character image revealed by a one-way fade at a fixed delay after
/// the start gesture. The id is the stable DOM identifier the web layer
/// resolves; a missing element is skipped, never an error.
#[derive(Clone, Copy, Debug)]
pub struct RevealTarget {
    pub element_id: &'static str,
    pub delay_ms: u64,
}

/// Reveal order is fixed by these stagger delays.
pub const REVEAL_TARGETS: [RevealTarget; 4] = [
    RevealTarget {
        element_id: "jediSolis",
        delay_ms: 1_000,
    },
    RevealTarget {
        element_id: "darthNightmare",
        delay_ms: 3_000,
    },
    RevealTarget {
        element_id: "sithJayden",
        delay_ms: 5_000,
    },
    RevealTarget {
        element_id: "brandon",
        delay_ms: 7_000,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Fading,
    Visible,
}

impl RevealTarget {
    /// The fade has no completion event; Visible is inferred from elapsed
    /// time once the delay plus the 2 s transition has passed.
    pub fn state_at(&self, elapsed_ms: u64) -> RevealState {
        if elapsed_ms < self.delay_ms {
            RevealState::Hidden
        } else if elapsed_ms < self.delay_ms + REVEAL_FADE_MS {
            RevealState::Fading
        } else {
            RevealState::Visible
        }
    }
}

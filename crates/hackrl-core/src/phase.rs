//! Lifecycle phase and program-state flags

use serde::{Deserialize, Serialize};

/// Host program-state flags, exported with every message
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramState {
    pub gameover: bool,
    pub panicking: bool,
    pub exiting: bool,
    pub in_moveloop: bool,
    pub in_impossible: bool,
}

/// Coarse stage of the host's run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifecyclePhase {
    #[default]
    Initializing,
    PlayerSelection,
    InMoveLoop,
    GameOver,
}

/// Monotonic phase tracker.
///
/// The phase only moves forward. The full snapshot schema is used once the
/// move loop has been entered, and stays in use through a game over reached
/// from the move loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTracker {
    phase: LifecyclePhase,
    move_loop_entered: bool,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Advance to `phase` if it is later than the current one
    pub fn advance(&mut self, phase: LifecyclePhase) -> bool {
        if phase <= self.phase {
            return false;
        }
        if phase == LifecyclePhase::InMoveLoop {
            self.move_loop_entered = true;
        }
        self.phase = phase;
        true
    }

    /// Fold the host's current flags into the tracked phase
    pub fn observe(&mut self, state: &ProgramState) -> bool {
        let mut changed = false;
        if state.in_moveloop {
            changed |= self.advance(LifecyclePhase::InMoveLoop);
        }
        if state.gameover {
            changed |= self.advance(LifecyclePhase::GameOver);
        }
        changed
    }

    /// Whether snapshots use the full schema
    pub fn full_schema(&self) -> bool {
        match self.phase {
            LifecyclePhase::InMoveLoop => true,
            LifecyclePhase::GameOver => self.move_loop_entered,
            _ => false,
        }
    }
}

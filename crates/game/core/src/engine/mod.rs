//! Carrier action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It runs
//! each action through the transition phases and hands back the side effects
//! the mutation requires, leaving their execution to the runtime.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase};

use crate::carrier::CarrierTransition;
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::GameState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionOutcome<T> {
    /// Action-specific result (new carrier id, movement report, counts).
    pub output: T,

    /// Side effects to carry out, in order, after the mutation.
    pub effects: Vec<Effect>,
}

/// Applies carrier actions to one game.
///
/// All state mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action and returns its output along with the effects it requested.
    ///
    /// Effects recorded before a failing `apply` or `post_validate` are
    /// discarded with the error; the state mutation is not rolled back.
    pub fn execute<T>(
        &mut self,
        env: &GameEnv<'_>,
        action: &T,
    ) -> Result<ExecutionOutcome<T::Output>, ExecuteError>
    where
        T: CarrierTransition + ?Sized,
    {
        let mut effects = Vec::new();
        let output = transition::drive_transition(action, self.state, env, &mut effects)?;
        Ok(ExecutionOutcome { output, effects })
    }

    pub fn state(&self) -> &GameState {
        self.state
    }
}

//! Three-phase driver shared by every carrier action.

use crate::carrier::CarrierTransition;
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase};

/// Runs a transition through the pipeline and returns its output.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and record effects
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    effects: &mut Vec<Effect>,
) -> Result<T::Output, ExecuteError>
where
    T: CarrierTransition + ?Sized,
{
    let phase_error = |phase, error| ExecuteError::new(transition.name(), phase, error);

    transition
        .pre_validate(state, env)
        .map_err(|error| phase_error(TransitionPhase::PreValidate, error))?;

    let output = transition
        .apply(state, env, effects)
        .map_err(|error| phase_error(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| phase_error(TransitionPhase::PostValidate, error))?;

    Ok(output)
}

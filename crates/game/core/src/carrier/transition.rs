use crate::carrier::CarrierError;
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a carrier command mutates game state.
///
/// `pre_validate` must reject every disallowed request without touching the
/// state, so a failed command leaves the game exactly as it was. `apply` may
/// assume `pre_validate` succeeded and records the side effects the mutation
/// needs in `effects` instead of performing them.
pub trait CarrierTransition {
    type Output;

    /// Short identifier used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        Ok(())
    }

    /// Applies the command by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        Ok(())
    }
}

//! One running game: its state, its rules, and where its effects go.

use std::sync::Arc;

use galaxy_core::carrier::{self, CarrierView};
use galaxy_core::{
    BuildCarrierAction, CarrierError, CarrierId, CarrierTransition, ClearWaypointsAction,
    ConvertToGiftAction, CountDownDepartureAction, Effect, GameEngine, GameState,
    MoveCarrierAction, MovementReport, PlayerId, PurgeCarriersAction, StarId,
};

use crate::api::{AchievementSink, Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::effects::EffectExecutor;
use crate::oracle::OracleManager;

/// Owns the state of a single game and drives carrier actions through the engine.
///
/// Every action mutates memory first and then executes the effects it
/// returned. Separate sessions share nothing but their repository and
/// achievement store.
pub struct GameSession {
    game_id: String,
    state: GameState,
    oracles: OracleManager,
    effects: EffectExecutor,
}

impl GameSession {
    pub fn new(
        game_id: impl Into<String>,
        state: GameState,
        oracles: OracleManager,
        effects: EffectExecutor,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            state,
            oracles,
            effects,
        }
    }

    /// Starts a new game wired up from `config`.
    pub async fn from_config(
        config: &RuntimeConfig,
        game_id: impl Into<String>,
        state: GameState,
        achievements: Arc<dyn AchievementSink>,
    ) -> Result<Self> {
        let repository = config.repository().await?;
        let specialists = config.specialists().await?;
        let oracles = OracleManager::from_constants(&state.constants.distances, specialists);
        Ok(Self::new(
            game_id,
            state,
            oracles,
            EffectExecutor::new(repository, achievements),
        ))
    }

    /// Loads the last saved state of `game_id`.
    pub async fn resume(
        game_id: impl Into<String>,
        oracles: OracleManager,
        effects: EffectExecutor,
    ) -> Result<Self> {
        let game_id = game_id.into();
        let state = effects
            .repository()
            .load(&game_id)
            .await?
            .ok_or_else(|| RuntimeError::GameNotFound(game_id.clone()))?;

        tracing::info!(game_id = %game_id, carriers = state.galaxy.carriers.len(), "resumed game");
        Ok(Self::new(game_id, state, oracles, effects))
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Builds a carrier at `star` from its garrison.
    pub async fn build_carrier(&mut self, star: StarId, ships: u32) -> Result<CarrierId> {
        let carrier = self.run(&BuildCarrierAction::new(star, ships)).await?;
        tracing::info!(game_id = %self.game_id, %carrier, %star, ships, "carrier built");
        Ok(carrier)
    }

    /// Turns `player`'s in-transit carrier into a gift for its destination's owner.
    pub async fn convert_to_gift(&mut self, player: PlayerId, carrier: CarrierId) -> Result<()> {
        self.run(&ConvertToGiftAction::new(player, carrier)).await?;
        tracing::info!(game_id = %self.game_id, %carrier, %player, "carrier converted to gift");
        Ok(())
    }

    /// Drops the queued orders of all of `player`'s carriers.
    pub async fn clear_waypoints(&mut self, player: PlayerId) -> Result<usize> {
        self.run(&ClearWaypointsAction::new(player)).await
    }

    /// Removes an eliminated player's carriers.
    pub async fn purge_player(&mut self, player: PlayerId) -> Result<usize> {
        let removed = self.run(&PurgeCarriersAction::new(player)).await?;
        tracing::info!(game_id = %self.game_id, %player, removed, "purged player carriers");
        Ok(removed)
    }

    /// Advances every carrier with orders by one tick.
    ///
    /// Orbiting carriers count down their departure delay and launch once it
    /// reaches zero. Reports come back in galaxy order for the combat and
    /// event processing that follows the tick.
    pub async fn advance_tick(&mut self) -> Result<Vec<MovementReport>> {
        let moving: Vec<CarrierId> = self
            .state
            .galaxy
            .carriers
            .iter()
            .filter(|carrier| carrier.current_waypoint().is_some())
            .map(|carrier| carrier.id)
            .collect();

        let mut reports = Vec::with_capacity(moving.len());
        for carrier_id in moving {
            let waiting = self.run(&CountDownDepartureAction::new(carrier_id)).await?;
            if waiting.is_some() {
                continue;
            }
            self.refresh_distance(carrier_id)?;

            let report = self.run(&MoveCarrierAction::new(carrier_id)).await?;
            if report.arrived_at_star {
                tracing::debug!(
                    game_id = %self.game_id,
                    carrier = %carrier_id,
                    star = %report.destination_star,
                    combat = report.combat_required_star,
                    "carrier arrived"
                );
            }
            reports.push(report);
        }
        Ok(reports)
    }

    /// Carriers any of `player`'s stars can see.
    pub fn visible_carriers(&self, player: PlayerId) -> Result<Vec<CarrierId>> {
        let env = self.oracles.as_game_env();
        let visible = carrier::player_visible_carriers(&self.state, &env, player)?;
        Ok(visible.into_iter().map(|carrier| carrier.id).collect())
    }

    /// Every carrier as `player` is allowed to see it.
    pub fn carrier_views(&self, player: PlayerId) -> Result<Vec<CarrierView>> {
        let env = self.oracles.as_game_env();
        Ok(carrier::sanitize(&self.state, &env, player)?)
    }

    pub async fn save(&self) -> Result<()> {
        self.effects
            .execute(&self.game_id, &self.state, &[Effect::SaveGame])
            .await
    }

    async fn run<T>(&mut self, action: &T) -> Result<T::Output>
    where
        T: CarrierTransition,
    {
        let outcome = {
            let env = self.oracles.as_game_env();
            GameEngine::new(&mut self.state).execute(&env, action)
        };
        let outcome = outcome.inspect_err(|error| {
            if error.is_rejection() {
                tracing::debug!(game_id = %self.game_id, %error, "action rejected");
            } else {
                tracing::warn!(game_id = %self.game_id, %error, "action failed");
            }
        })?;

        self.effects
            .execute(&self.game_id, &self.state, &outcome.effects)
            .await?;
        Ok(outcome.output)
    }

    /// Measures what is left of an in-transit carrier's leg from where it is now.
    fn refresh_distance(&mut self, carrier_id: CarrierId) -> Result<()> {
        let env = self.oracles.as_game_env();
        let distance = env.distance().map_err(CarrierError::from)?;
        let galaxy = &mut self.state.galaxy;

        let Some(destination) = galaxy
            .carrier(carrier_id)
            .filter(|carrier| carrier::is_in_transit(carrier))
            .and_then(|carrier| carrier.current_waypoint())
            .map(|waypoint| waypoint.destination)
        else {
            return Ok(());
        };
        let target = galaxy
            .star(destination)
            .ok_or(CarrierError::StarNotFound(destination))?
            .location;

        if let Some(carrier) = galaxy.carrier_mut(carrier_id) {
            carrier.distance_to_destination = distance.distance_between(carrier.location, target);
        }
        Ok(())
    }
}

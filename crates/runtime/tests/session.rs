mod common;

use std::sync::Arc;

use async_trait::async_trait;
use galaxy_core::{
    CarrierError, CarrierId, CarrierView, GameState, Location, MovementReport, PlayerId, StarId,
    UserId, Waypoint, WaypointAction,
};
use galaxy_runtime::{
    EffectExecutor, GameRepository, GameSession, GiftTotals, InMemoryAchievements,
    RepositoryError, RuntimeError,
};

use common::{GAME, Harness, dispatch, galaxy_state, init_tracing};

async fn tick_until_arrival(session: &mut GameSession, carrier: CarrierId) -> MovementReport {
    for _ in 0..40 {
        let reports = session.advance_tick().await.unwrap();
        if let Some(report) = reports
            .into_iter()
            .find(|report| report.carrier == carrier && report.arrived_at_star)
        {
            return report;
        }
    }
    panic!("{carrier} never arrived");
}

#[tokio::test]
async fn build_carrier_persists_star_and_carrier() {
    init_tracing();
    let state = galaxy_state();
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    let id = session.build_carrier(StarId(1), 4).await.unwrap();

    let saved = harness.repository.load(GAME).await.unwrap().unwrap();
    assert_eq!(&saved, session.state());
    let carrier = saved.galaxy.carrier(id).unwrap();
    assert_eq!(carrier.name, "Sol 1");
    assert_eq!(carrier.ships, 4);
    assert_eq!(saved.galaxy.star(StarId(1)).unwrap().garrison_actual, 16.0);
    assert_eq!(harness.repository.save_count().unwrap(), 1);
}

#[tokio::test]
async fn rejected_build_saves_nothing() {
    let state = galaxy_state();
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    let error = session.build_carrier(StarId(3), 1).await.unwrap_err();

    assert!(error.is_rejection());
    assert!(matches!(
        error,
        RuntimeError::Execute(ref failed)
            if failed.error == CarrierError::NoGarrison { star: StarId(3) }
    ));
    assert_eq!(harness.repository.save_count().unwrap(), 0);
}

#[tokio::test]
async fn carrier_launches_travels_and_claims_neutral_star() {
    init_tracing();
    let mut state = galaxy_state();
    let id = dispatch(&mut state, StarId(1), StarId(3), 5);
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    let first = session.advance_tick().await.unwrap();
    assert_eq!(first.len(), 1);
    assert!(!first[0].arrived_at_star);
    let carrier = session.state().galaxy.carrier(id).unwrap();
    assert_eq!(carrier.orbiting, None);
    assert_eq!(carrier.in_transit_from, Some(StarId(1)));
    assert_eq!(carrier.in_transit_to, Some(StarId(3)));
    assert_eq!(carrier.location, Location::new(0.0, 10.0));

    let second = session.advance_tick().await.unwrap();
    assert!(second[0].arrived_at_star);
    assert!(!second[0].combat_required_star);
    let state = session.state();
    assert_eq!(state.galaxy.star(StarId(3)).unwrap().owned_by_player_id, Some(PlayerId(1)));
    let carrier = state.galaxy.carrier(id).unwrap();
    assert_eq!(carrier.orbiting, Some(StarId(3)));
    assert!(carrier.waypoints.is_empty());

    assert!(session.advance_tick().await.unwrap().is_empty());
    assert_eq!(harness.repository.save_count().unwrap(), 0);
}

#[tokio::test]
async fn departure_waits_for_delay() {
    let mut state = galaxy_state();
    let id = dispatch(&mut state, StarId(1), StarId(3), 5);
    state.galaxy.carrier_mut(id).unwrap().waypoints[0].delay_ticks = 2;
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    assert!(session.advance_tick().await.unwrap().is_empty());
    assert!(session.advance_tick().await.unwrap().is_empty());
    let carrier = session.state().galaxy.carrier(id).unwrap();
    assert_eq!(carrier.orbiting, Some(StarId(1)));
    assert_eq!(carrier.waypoints[0].delay_ticks, 0);

    let reports = session.advance_tick().await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(session.state().galaxy.carrier(id).unwrap().orbiting, None);
}

#[tokio::test]
async fn gift_changes_hands_on_arrival() {
    init_tracing();
    let mut state = galaxy_state();
    let id = dispatch(&mut state, StarId(1), StarId(2), 6);
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    session.advance_tick().await.unwrap();
    session.convert_to_gift(PlayerId(1), id).await.unwrap();

    assert_eq!(harness.repository.save_count().unwrap(), 1);
    assert_eq!(
        harness.achievements.totals(UserId(100)).unwrap(),
        GiftTotals {
            sent: 6,
            received: 0
        }
    );
    let saved = harness.repository.load(GAME).await.unwrap().unwrap();
    assert!(saved.galaxy.carrier(id).unwrap().is_gift);

    let report = tick_until_arrival(&mut session, id).await;

    assert!(!report.combat_required_star);
    let carrier = session.state().galaxy.carrier(id).unwrap();
    assert_eq!(carrier.owned_by_player_id, Some(PlayerId(2)));
    assert!(!carrier.is_gift);
    assert_eq!(
        harness.achievements.totals(UserId(200)).unwrap(),
        GiftTotals {
            sent: 0,
            received: 6
        }
    );
    assert_eq!(harness.repository.save_count().unwrap(), 2);
}

#[tokio::test]
async fn hostile_arrival_requires_combat() {
    let mut state = galaxy_state();
    let id = dispatch(&mut state, StarId(1), StarId(2), 3);
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    let report = tick_until_arrival(&mut session, id).await;

    assert!(report.combat_required_star);
    assert_eq!(report.carrier_owner, Some(PlayerId(1)));
    let state = session.state();
    assert_eq!(state.galaxy.carrier(id).unwrap().owned_by_player_id, Some(PlayerId(1)));
    assert_eq!(state.galaxy.star(StarId(2)).unwrap().owned_by_player_id, Some(PlayerId(2)));
}

#[tokio::test]
async fn gift_of_orbiting_carrier_is_refused() {
    let mut state = galaxy_state();
    let id = dispatch(&mut state, StarId(1), StarId(2), 6);
    let harness = Harness::new(&state);
    let mut session = harness.session(state.clone());

    let error = session.convert_to_gift(PlayerId(1), id).await.unwrap_err();

    assert!(error.is_rejection());
    assert_eq!(session.state(), &state);
    assert_eq!(harness.achievements.totals(UserId(100)).unwrap(), GiftTotals::default());
}

struct UnavailableRepository;

#[async_trait]
impl GameRepository for UnavailableRepository {
    async fn save(
        &self,
        _game_id: &str,
        _state: &GameState,
    ) -> galaxy_runtime::repository::Result<()> {
        Err(RepositoryError::Io(std::io::Error::other("disk full")))
    }

    async fn load(&self, _game_id: &str) -> galaxy_runtime::repository::Result<Option<GameState>> {
        Ok(None)
    }
}

#[tokio::test]
async fn failed_save_stops_remaining_effects() {
    let mut state = galaxy_state();
    let id = dispatch(&mut state, StarId(1), StarId(2), 6);
    let harness = Harness::new(&state);
    let achievements = Arc::new(InMemoryAchievements::new());
    let executor = EffectExecutor::new(Arc::new(UnavailableRepository), achievements.clone());
    let mut session = GameSession::new(GAME, state, harness.oracles.clone(), executor);

    session.advance_tick().await.unwrap();
    let error = session.convert_to_gift(PlayerId(1), id).await.unwrap_err();

    assert!(matches!(error, RuntimeError::Repository(RepositoryError::Io(_))));
    assert!(!error.is_rejection());
    assert!(session.state().galaxy.carrier(id).unwrap().is_gift);
    assert_eq!(achievements.totals(UserId(100)).unwrap(), GiftTotals::default());
}

#[tokio::test]
async fn foreign_carriers_are_seen_only_in_range_and_sanitized() {
    let mut state = galaxy_state();
    let own = dispatch(&mut state, StarId(1), StarId(3), 2);
    let far = dispatch(&mut state, StarId(2), StarId(1), 3);
    let near = dispatch(&mut state, StarId(2), StarId(1), 4);
    {
        let near = state.galaxy.carrier_mut(near).unwrap();
        near.orbiting = None;
        near.in_transit_from = Some(StarId(2));
        near.in_transit_to = Some(StarId(1));
        near.location = Location::new(50.0, 0.0);
        near.waypoints[0] = Waypoint::new(StarId(2), StarId(1))
            .with_action(WaypointAction::DropAll, 4)
            .with_delay(3);
        near.waypoints.push_back(Waypoint::new(StarId(1), StarId(3)));
    }
    let harness = Harness::new(&state);
    let session = harness.session(state);

    assert_eq!(session.visible_carriers(PlayerId(1)).unwrap(), vec![own, near]);

    let views = session.carrier_views(PlayerId(1)).unwrap();
    assert_eq!(views.len(), 3);
    assert!(matches!(&views[0], CarrierView::Owned { carrier, .. } if carrier.id == own));
    let CarrierView::Public(public) = &views[2] else {
        panic!("foreign carrier must be sanitized");
    };
    assert_eq!(public.id, near);
    assert_eq!(public.ships, Some(4));
    assert_eq!(public.specialist, None);
    assert_eq!(public.waypoints.len(), 1);
    assert_eq!(public.waypoints[0].action, WaypointAction::CollectAll);
    assert_eq!(public.waypoints[0].delay_ticks, 0);
    assert!(matches!(
        &views[1],
        CarrierView::Public(public) if public.id == far && public.waypoints.is_empty()
    ));
}

#[tokio::test]
async fn clearing_and_purging_orders() {
    let mut state = galaxy_state();
    let ada = dispatch(&mut state, StarId(1), StarId(3), 2);
    dispatch(&mut state, StarId(2), StarId(1), 3);
    dispatch(&mut state, StarId(2), StarId(1), 3);
    let harness = Harness::new(&state);
    let mut session = harness.session(state);

    assert_eq!(session.clear_waypoints(PlayerId(1)).await.unwrap(), 1);
    assert!(session.state().galaxy.carrier(ada).unwrap().waypoints.is_empty());

    assert_eq!(session.purge_player(PlayerId(2)).await.unwrap(), 2);
    let remaining: Vec<CarrierId> = session
        .state()
        .galaxy
        .carriers
        .iter()
        .map(|carrier| carrier.id)
        .collect();
    assert_eq!(remaining, vec![ada]);
}

#[tokio::test]
async fn resume_requires_saved_game() {
    let state = galaxy_state();
    let harness = Harness::new(&state);

    let error = GameSession::resume(GAME, harness.oracles.clone(), harness.executor.clone())
        .await
        .err()
        .unwrap();
    assert!(matches!(error, RuntimeError::GameNotFound(ref id) if id == GAME));

    let mut session = harness.session(state);
    session.build_carrier(StarId(1), 2).await.unwrap();

    let resumed = GameSession::resume(GAME, harness.oracles.clone(), harness.executor.clone())
        .await
        .unwrap();
    assert_eq!(resumed.state(), session.state());
    assert_eq!(resumed.game_id(), GAME);
}

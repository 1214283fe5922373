//! Fixed-cadence entity spawning
//!
//! Each kind has its own period. On a matching tick one entity of that kind is
//! appended at a uniformly random lane just above the visible area.

use rand::Rng;

use super::state::{Entity, EntityKind, GameState};
use crate::tuning::Tuning;

/// Kinds due to spawn on `tick` (several may coincide)
pub fn due_kinds(tick: u64, tuning: &Tuning) -> impl Iterator<Item = EntityKind> + '_ {
    EntityKind::ALL
        .into_iter()
        .filter(move |&kind| tick % tuning.rule(kind).period == 0)
}

/// Spawn everything due on the current tick
pub fn run(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }

    let due: Vec<EntityKind> = due_kinds(state.tick, &state.tuning).collect();
    for kind in due {
        let lane = state.rng.random_range(0..state.grid.lane_count);
        let entity = Entity::above_top(kind, lane, state.tuning.rule(kind).size);
        log::debug!("tick {}: spawned {:?} in lane {}", state.tick, kind, lane);
        state.collection_mut(kind).push(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_due_kinds_by_period() {
        let tuning = Tuning::default();
        assert_eq!(due_kinds(1, &tuning).count(), 0);
        assert_eq!(due_kinds(70, &tuning).collect::<Vec<_>>(), vec![EntityKind::Obstacle]);
        assert_eq!(due_kinds(120, &tuning).collect::<Vec<_>>(), vec![EntityKind::Coin]);
        // 2100 = lcm(70, 300), 4200 is divisible by all three
        assert_eq!(
            due_kinds(2100, &tuning).collect::<Vec<_>>(),
            vec![EntityKind::Obstacle, EntityKind::Boost]
        );
        assert_eq!(due_kinds(4200, &tuning).count(), 3);
    }

    #[test]
    fn test_spawn_places_above_top() {
        let mut state = GameState::new(1);
        state.tick = 70;
        run(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.coins.is_empty());
        let obstacle = state.obstacles[0];
        assert_eq!(obstacle.y, -40.0);
        assert_eq!(obstacle.size, 40.0);
    }

    #[test]
    fn test_no_spawn_after_game_over() {
        let mut state = GameState::new(1);
        state.tick = 4200;
        state.phase = crate::sim::GamePhase::GameOver;
        run(&mut state);
        assert_eq!(state.entity_count(), 0);
    }

    #[test]
    fn test_spawn_lanes_cover_grid() {
        let mut state = GameState::new(42);
        state.tick = 70;
        for _ in 0..200 {
            run(&mut state);
        }
        for lane in 0..state.grid.lane_count {
            assert!(state.obstacles.iter().any(|o| o.lane == lane), "lane {} never used", lane);
        }
    }

    proptest! {
        #[test]
        fn prop_spawned_lanes_in_range(seed in any::<u64>(), lanes in 1usize..9, tick in 1u64..5000) {
            let tuning = Tuning { lane_count: lanes, ..Default::default() };
            let mut state = GameState::with_tuning(seed, tuning);
            state.tick = tick;
            run(&mut state);
            prop_assert!(state.entities().all(|e| e.lane < lanes));
        }
    }
}

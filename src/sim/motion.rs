//! Scrolling and off-screen culling

use super::state::{Entity, EntityKind, GameState};

/// Advance every entity by `speed` and drop the ones that scrolled off the bottom.
/// Builds a new list rather than removing in place.
pub fn advance(entities: Vec<Entity>, speed: f64, visible_height: f64) -> Vec<Entity> {
    entities
        .into_iter()
        .map(|mut entity| {
            entity.y += speed;
            entity
        })
        .filter(|entity| !entity.is_off_screen(visible_height))
        .collect()
}

/// Scroll all three collections by the current speed
pub fn run(state: &mut GameState) {
    let speed = state.speed;
    let height = state.grid.height;
    for kind in EntityKind::ALL {
        let list = std::mem::take(state.collection_mut(kind));
        *state.collection_mut(kind) = advance(list, speed, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coin(y: f64) -> Entity {
        Entity {
            kind: EntityKind::Coin,
            lane: 0,
            y,
            size: 32.0,
        }
    }

    #[test]
    fn test_advance_moves_by_speed() {
        let moved = advance(vec![coin(-32.0), coin(100.0)], 4.5, 640.0);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved[0].y, -27.5);
        assert_eq!(moved[1].y, 104.5);
    }

    #[test]
    fn test_advance_culls_past_bottom() {
        // 640 + 32 = 672 is the cull line for coins, landing on it is not enough
        let moved = advance(vec![coin(660.0), coin(668.0), coin(669.0)], 4.0, 640.0);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved[0].y, 664.0);
        assert_eq!(moved[1].y, 672.0);
    }

    #[test]
    fn test_run_moves_every_collection() {
        let mut state = GameState::new(3);
        state.place(EntityKind::Obstacle, 0, 10.0);
        state.place(EntityKind::Coin, 1, 20.0);
        state.place(EntityKind::Boost, 2, 30.0);
        state.speed = 5.0;
        run(&mut state);
        assert_eq!(state.obstacles[0].y, 15.0);
        assert_eq!(state.coins[0].y, 25.0);
        assert_eq!(state.boosts[0].y, 35.0);
    }

    proptest! {
        #[test]
        fn prop_survivors_move_exactly_speed(
            ys in proptest::collection::vec(-40.0f64..700.0, 0..20),
            speed in 0.1f64..12.0,
        ) {
            let before: Vec<Entity> = ys.iter().map(|&y| coin(y)).collect();
            let after = advance(before.clone(), speed, 640.0);
            let expected: Vec<f64> = before
                .iter()
                .map(|e| e.y + speed)
                .filter(|&y| y <= 640.0 + 32.0)
                .collect();
            let actual: Vec<f64> = after.iter().map(|e| e.y).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}

//! Read-only per-frame view of the simulation for presentation

use serde::Serialize;

use super::lanes::LaneGrid;
use super::state::{Entity, GameState, Player};

/// Everything a renderer or HUD needs for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub grid: LaneGrid,
    pub player: &'a Player,
    pub obstacles: &'a [Entity],
    pub coins: &'a [Entity],
    pub boosts: &'a [Entity],
    pub score: u64,
    pub coin_count: u32,
    pub speed: f64,
    pub boost_timer: u32,
    pub game_over: bool,
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            tick: state.tick,
            grid: state.grid,
            player: &state.player,
            obstacles: &state.obstacles,
            coins: &state.coins,
            boosts: &state.boosts,
            score: state.score,
            coin_count: state.coin_count,
            speed: state.speed,
            boost_timer: state.boost_timer,
            game_over: state.is_game_over(),
        }
    }

    pub fn boosting(&self) -> bool {
        self.boost_timer > 0
    }

    /// All entities in draw order
    pub fn entities(&self) -> impl Iterator<Item = &'a Entity> + 'a {
        self.obstacles
            .iter()
            .chain(self.coins.iter())
            .chain(self.boosts.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EntityKind;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(5);
        state.place(EntityKind::Coin, 1, 10.0);
        state.score = 77;
        let snap = Snapshot::of(&state);
        assert_eq!(snap.score, 77);
        assert_eq!(snap.coins.len(), 1);
        assert_eq!(snap.player.lane, 2);
        assert!(!snap.game_over);
        assert_eq!(snap.entities().count(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(5);
        let json = serde_json::to_value(Snapshot::of(&state)).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["game_over"], false);
        assert_eq!(json["player"]["lane"], 2);
        assert!(json["obstacles"].as_array().unwrap().is_empty());
    }
}

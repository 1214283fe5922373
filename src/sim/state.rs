//! Game state and core simulation types
//!
//! One `GameState` holds everything a session mutates. Restarting a session
//! means replacing it with a fresh instance.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lanes::LaneGrid;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance
    Running,
    /// Player crashed, terminal until restart
    GameOver,
}

/// Scrolling entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ends the run on contact
    Obstacle,
    /// Collected for score
    Coin,
    /// Temporary speed bonus
    Boost,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Obstacle, EntityKind::Coin, EntityKind::Boost];
}

/// An obstacle, coin or boost scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub lane: usize,
    /// Top edge (pixels, grows downward)
    pub y: f64,
    /// Square side length
    pub size: f64,
}

impl Entity {
    /// New entity sitting just above the visible top edge
    pub fn above_top(kind: EntityKind, lane: usize, size: f64) -> Self {
        Self {
            kind,
            lane,
            y: -size,
            size,
        }
    }

    /// True once the entity is more than its own size past the bottom edge
    #[inline]
    pub fn is_off_screen(&self, visible_height: f64) -> bool {
        self.y > visible_height + self.size
    }
}

/// The player's car
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lane: usize,
    /// Top edge, fixed for the whole session
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Player {
    pub fn new(tuning: &Tuning, grid: &LaneGrid) -> Self {
        Self {
            lane: grid.clamp_lane(tuning.player_start_lane as i64),
            y: grid.height - tuning.player_row_offset,
            width: grid.lane_width() * tuning.player_width_ratio,
            height: tuning.player_height,
        }
    }

    /// Move by `delta` lanes, clamped to the grid
    pub fn shift(&mut self, delta: i64, grid: &LaneGrid) {
        self.lane = grid.clamp_lane(self.lane as i64 + delta);
    }
}

/// Something noteworthy that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { lane: usize },
    BoostCollected { lane: usize },
    /// Player hit an obstacle, the run is over
    Crashed { final_score: u64 },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn lane RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub grid: LaneGrid,
    pub player: Player,
    pub obstacles: Vec<Entity>,
    pub coins: Vec<Entity>,
    pub boosts: Vec<Entity>,
    pub score: u64,
    pub coin_count: u32,
    pub speed: f64,
    /// Boost ticks remaining
    pub boost_timer: u32,
    /// Monotonic frame counter
    pub tick: u64,
    pub phase: GamePhase,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let grid = LaneGrid::from_tuning(&tuning);
        let player = Player::new(&tuning, &grid);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.base_speed,
            tuning,
            grid,
            player,
            obstacles: Vec::new(),
            coins: Vec::new(),
            boosts: Vec::new(),
            score: 0,
            coin_count: 0,
            boost_timer: 0,
            tick: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn base_speed(&self) -> f64 {
        self.tuning.base_speed
    }

    pub fn collection(&self, kind: EntityKind) -> &Vec<Entity> {
        match kind {
            EntityKind::Obstacle => &self.obstacles,
            EntityKind::Coin => &self.coins,
            EntityKind::Boost => &self.boosts,
        }
    }

    pub fn collection_mut(&mut self, kind: EntityKind) -> &mut Vec<Entity> {
        match kind {
            EntityKind::Obstacle => &mut self.obstacles,
            EntityKind::Coin => &mut self.coins,
            EntityKind::Boost => &mut self.boosts,
        }
    }

    /// Place an entity directly (lane is clamped into the grid)
    pub fn place(&mut self, kind: EntityKind, lane: usize, y: f64) {
        let lane = self.grid.clamp_lane(lane as i64);
        let size = self.tuning.rule(kind).size;
        self.collection_mut(kind).push(Entity { kind, lane, y, size });
    }

    /// Total scrolling entities across all collections
    pub fn entity_count(&self) -> usize {
        self.obstacles.len() + self.coins.len() + self.boosts.len()
    }

    /// Iterate every scrolling entity
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.obstacles
            .iter()
            .chain(self.coins.iter())
            .chain(self.boosts.iter())
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.lane, 2);
        assert_eq!(state.player.y, 520.0);
        assert_eq!(state.player.width, 48.0);
        assert_eq!(state.speed, 4.0);
        assert_eq!(state.entity_count(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.coin_count, 0);
        assert_eq!(state.boost_timer, 0);
    }

    #[test]
    fn test_player_shift_clamps() {
        let mut state = GameState::new(7);
        let grid = state.grid;
        state.player.shift(-10, &grid);
        assert_eq!(state.player.lane, 0);
        state.player.shift(10, &grid);
        assert_eq!(state.player.lane, 4);
    }

    #[test]
    fn test_entity_off_screen_uses_own_size() {
        let coin = Entity {
            kind: EntityKind::Coin,
            lane: 0,
            y: 672.0,
            size: 32.0,
        };
        // Sitting exactly on the cull line is still kept
        assert!(!coin.is_off_screen(640.0));
        let coin = Entity { y: 672.5, ..coin };
        assert!(coin.is_off_screen(640.0));
        let obstacle = Entity {
            kind: EntityKind::Obstacle,
            y: 680.0,
            size: 40.0,
            ..coin
        };
        assert!(!obstacle.is_off_screen(640.0));
    }

    #[test]
    fn test_place_uses_kind_size() {
        let mut state = GameState::new(7);
        state.place(EntityKind::Obstacle, 9, 10.0);
        state.place(EntityKind::Coin, 1, 10.0);
        assert_eq!(state.obstacles[0].lane, 4);
        assert_eq!(state.obstacles[0].size, 40.0);
        assert_eq!(state.coins[0].size, 32.0);
        assert_eq!(state.entity_count(), 2);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(7);
        state.events.push(GameEvent::CoinCollected { lane: 1 });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }
}

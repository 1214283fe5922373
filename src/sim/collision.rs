//! Collision detection and response
//!
//! The player and every scrolling entity are axis-aligned boxes. Overlap is the
//! strict open-interval test, so boxes that merely touch do not collide.

use glam::DVec2;

use super::lanes::LaneGrid;
use super::state::{Entity, EntityKind, GameEvent, GamePhase, GameState, Player};

/// What touching an entity does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ends the run
    Lethal,
    /// Adds to score and coin count
    Collectible,
    /// Temporary speed bonus
    Beneficial,
}

impl EntityKind {
    pub fn contact(self) -> Contact {
        match self {
            EntityKind::Obstacle => Contact::Lethal,
            EntityKind::Coin => Contact::Collectible,
            EntityKind::Boost => Contact::Beneficial,
        }
    }
}

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Strict overlap: shared edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Player's box, centered in its lane
pub fn player_box(grid: &LaneGrid, player: &Player) -> Aabb {
    Aabb::from_origin_size(
        DVec2::new(grid.centered_x(player.lane, player.width), player.y),
        DVec2::new(player.width, player.height),
    )
}

/// Entity's square box, centered in its lane
pub fn entity_box(grid: &LaneGrid, entity: &Entity) -> Aabb {
    Aabb::from_origin_size(
        DVec2::new(grid.centered_x(entity.lane, entity.size), entity.y),
        DVec2::splat(entity.size),
    )
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub crashed: bool,
    pub coins_collected: u32,
    pub boosts_collected: u32,
}

/// Split a collection into (kept, hit) without mutating during traversal
fn split_hits(entities: Vec<Entity>, player: &Aabb, grid: &LaneGrid) -> (Vec<Entity>, Vec<Entity>) {
    entities
        .into_iter()
        .partition(|entity| !player.overlaps(&entity_box(grid, entity)))
}

/// Test the player against every entity and apply the results.
///
/// The first obstacle hit ends the run and stops the pass, so coins and boosts
/// overlapping on the same tick are not collected. Every overlapping coin and
/// boost is consumed otherwise.
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    if state.is_game_over() {
        return report;
    }

    let grid = state.grid;
    let player = player_box(&grid, &state.player);

    if state
        .obstacles
        .iter()
        .any(|obstacle| player.overlaps(&entity_box(&grid, obstacle)))
    {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Crashed {
            final_score: state.score,
        });
        log::info!(
            "Crashed on tick {} with score {} ({} coins)",
            state.tick,
            state.score,
            state.coin_count
        );
        report.crashed = true;
        return report;
    }

    let (kept, hits) = split_hits(std::mem::take(&mut state.coins), &player, &grid);
    state.coins = kept;
    for coin in hits {
        state.coin_count += 1;
        state.score += state.tuning.coin_reward;
        state.events.push(GameEvent::CoinCollected { lane: coin.lane });
        report.coins_collected += 1;
    }

    let (kept, hits) = split_hits(std::mem::take(&mut state.boosts), &player, &grid);
    state.boosts = kept;
    for boost in hits {
        state.boost_timer = state.tuning.boost_duration;
        state.speed = state.tuning.base_speed + state.tuning.boost_bonus;
        state.events.push(GameEvent::BoostCollected { lane: boost.lane });
        report.boosts_collected += 1;
    }

    if report.coins_collected > 0 || report.boosts_collected > 0 {
        log::debug!(
            "tick {}: collected {} coins, {} boosts",
            state.tick,
            report.coins_collected,
            report.boosts_collected
        );
    }

    report
}

//! Per-frame simulation tick
//!
//! Core game loop step. Runs spawner, motion, collision and the speed ramp in a
//! fixed order. Knows nothing about rendering or the host.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use super::{collision, motion, spawner};

/// Discrete lane-change commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    MoveLeft,
    MoveRight,
}

impl InputCommand {
    fn lane_delta(self) -> i64 {
        match self {
            InputCommand::MoveLeft => -1,
            InputCommand::MoveRight => 1,
        }
    }
}

/// Apply a lane command immediately (ignored once the run is over)
pub fn apply_command(state: &mut GameState, command: InputCommand) {
    if state.is_game_over() {
        return;
    }
    let grid = state.grid;
    state.player.shift(command.lane_delta(), &grid);
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.tick += 1;
    // Survival reward
    state.score += state.speed.floor() as u64;

    spawner::run(state);
    motion::run(state);

    if collision::resolve(state).crashed {
        return;
    }

    if state.boost_timer > 0 {
        state.boost_timer -= 1;
        if state.boost_timer == 0 {
            // Back to the unramped base; ramp progress made during the boost is dropped
            state.speed = state.tuning.base_speed;
        }
    }

    state.speed += state.tuning.speed_ramp;
}

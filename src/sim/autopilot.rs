//! Idle/demo mode - the game plays itself
//!
//! Reads the state and suggests at most one lane command per frame. Dodging
//! obstacles always wins over chasing coins and boosts.

use super::collision::Contact;
use super::state::{Entity, GameState};
use super::tick::InputCommand;

/// How many ticks ahead an obstacle counts as a threat
const LOOKAHEAD_TICKS: f64 = 40.0;

/// Vertical free space between the player and the nearest obstacle still ahead in `lane`
fn clearance(state: &GameState, lane: usize) -> f64 {
    let player = &state.player;
    state
        .entities()
        .filter(|e| e.kind.contact() == Contact::Lethal)
        .filter(|o| o.lane == lane && o.y < player.y + player.height)
        .map(|o| player.y - (o.y + o.size))
        .fold(f64::INFINITY, f64::min)
}

fn lookahead(state: &GameState) -> f64 {
    state.speed * LOOKAHEAD_TICKS
}

fn step_toward(from: usize, to: usize) -> Option<InputCommand> {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => Some(InputCommand::MoveLeft),
        std::cmp::Ordering::Greater => Some(InputCommand::MoveRight),
        std::cmp::Ordering::Equal => None,
    }
}

/// Closest pickup above the player that is worth chasing
fn nearest_pickup(state: &GameState) -> Option<&Entity> {
    let player = &state.player;
    state
        .entities()
        .filter(|e| e.kind.contact() != Contact::Lethal)
        .filter(|e| e.y + e.size <= player.y)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
}

/// Pick this frame's command, if any
pub fn choose(state: &GameState) -> Option<InputCommand> {
    if state.is_game_over() {
        return None;
    }

    let lane = state.player.lane;
    let window = lookahead(state);

    let neighbors = [
        lane.checked_sub(1),
        Some(lane + 1).filter(|&l| state.grid.contains(l)),
    ];

    let here = clearance(state, lane);
    if here < window {
        // Threatened: take the adjacent lane with the most room
        let escape = neighbors
            .into_iter()
            .flatten()
            .map(|l| (l, clearance(state, l)))
            .filter(|&(_, room)| room > here)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        return escape.and_then(|(l, _)| step_toward(lane, l));
    }

    let target = nearest_pickup(state)?;
    let command = step_toward(lane, target.lane)?;
    let next = match command {
        InputCommand::MoveLeft => lane - 1,
        InputCommand::MoveRight => lane + 1,
    };
    (clearance(state, next) >= window).then_some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;
    use crate::sim::tick::{apply_command, tick};
    use crate::sim::GamePhase;
    use crate::tuning::{SpawnRule, Tuning};

    fn quiet_state() -> GameState {
        let never = |size| SpawnRule {
            period: u64::MAX,
            size,
        };
        GameState::with_tuning(
            3,
            Tuning {
                obstacle: never(40.0),
                coin: never(32.0),
                boost: never(32.0),
                ..Default::default()
            },
        )
    }

    fn drive(state: &mut GameState, ticks: usize) {
        for _ in 0..ticks {
            if let Some(cmd) = choose(state) {
                apply_command(state, cmd);
            }
            tick(state);
        }
    }

    #[test]
    fn test_idle_when_nothing_around() {
        let state = quiet_state();
        assert_eq!(choose(&state), None);
    }

    #[test]
    fn test_dodges_obstacle_ahead() {
        let mut state = quiet_state();
        state.place(EntityKind::Obstacle, 2, 400.0);
        assert!(choose(&state).is_some());
        drive(&mut state, 200);
        assert_eq!(state.phase, GamePhase::Running);
        assert_ne!(state.player.lane, 2);
    }

    #[test]
    fn test_dodges_away_from_blocked_side() {
        let mut state = quiet_state();
        state.place(EntityKind::Obstacle, 2, 400.0);
        state.place(EntityKind::Obstacle, 1, 380.0);
        assert_eq!(choose(&state), Some(InputCommand::MoveRight));
    }

    #[test]
    fn test_edge_lane_escapes_inward() {
        let mut state = quiet_state();
        state.player.lane = 0;
        state.place(EntityKind::Obstacle, 0, 420.0);
        assert_eq!(choose(&state), Some(InputCommand::MoveRight));
    }

    #[test]
    fn test_chases_coin() {
        let mut state = quiet_state();
        state.place(EntityKind::Coin, 4, 100.0);
        assert_eq!(choose(&state), Some(InputCommand::MoveRight));
        drive(&mut state, 150);
        assert_eq!(state.coin_count, 1);
    }

    #[test]
    fn test_wont_chase_into_obstacle() {
        let mut state = quiet_state();
        state.place(EntityKind::Coin, 3, 100.0);
        state.place(EntityKind::Obstacle, 3, 420.0);
        assert_eq!(choose(&state), None);
    }

    #[test]
    fn test_ignores_pickups_behind_player() {
        let mut state = quiet_state();
        state.place(EntityKind::Coin, 0, 600.0);
        assert_eq!(choose(&state), None);
    }
}

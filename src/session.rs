//! Session driver
//!
//! Owns the game state and the leaderboard. The host calls `frame()` once per
//! display refresh while `is_running()` holds; restarting swaps in a fresh
//! state and bumps the generation so an older frame loop stops itself.

use crate::highscores::HighScores;
use crate::sim::{GameEvent, GameState, InputCommand, Snapshot, apply_command, autopilot, tick};
use crate::tuning::Tuning;

/// One player's game, across restarts
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    state: GameState,
    scores: HighScores,
    running: bool,
    generation: u64,
    /// Let the demo AI steer
    pub autopilot: bool,
    /// Rank achieved by the last finished run, if it made the board
    last_rank: Option<usize>,
}

impl Session {
    /// Idle session: fresh state on screen, no loop running yet
    pub fn new(tuning: Tuning, scores: HighScores) -> Self {
        let tuning = tuning.sanitized();
        Self {
            state: GameState::with_tuning(0, tuning.clone()),
            tuning,
            scores,
            running: false,
            generation: 0,
            autopilot: false,
            last_rank: None,
        }
    }

    /// Reset and begin a new run. Returns the generation the host loop should carry.
    pub fn start(&mut self, seed: u64) -> u64 {
        self.state = GameState::with_tuning(seed, self.tuning.clone());
        self.running = true;
        self.generation += 1;
        self.last_rank = None;
        log::info!("Run {} started with seed {}", self.generation, seed);
        self.generation
    }

    /// Stop scheduling frames, leaving the state as-is
    pub fn cancel(&mut self) {
        if self.running {
            log::info!("Run {} cancelled on tick {}", self.generation, self.state.tick);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a frame loop started for `generation` should schedule another frame
    pub fn should_schedule(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    /// Apply a lane command right away
    pub fn handle(&mut self, command: InputCommand) {
        apply_command(&mut self.state, command);
    }

    /// Advance one frame (if running) and return what to draw
    pub fn frame(&mut self) -> Snapshot<'_> {
        if self.running {
            if self.autopilot {
                if let Some(command) = autopilot::choose(&self.state) {
                    apply_command(&mut self.state, command);
                }
            }

            tick(&mut self.state);

            for event in self.state.drain_events() {
                if let GameEvent::Crashed { final_score } = event {
                    self.finish(final_score);
                }
            }
        }

        Snapshot::of(&self.state)
    }

    fn finish(&mut self, final_score: u64) {
        self.running = false;
        self.last_rank = self.scores.record_score(final_score);
        self.scores.save();
        match self.last_rank {
            Some(rank) => log::info!("Game over: {} pts, rank #{}", final_score, rank),
            None => log::info!("Game over: {} pts", final_score),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }
}

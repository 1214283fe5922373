//! Lane Runner - a lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (spawning, scrolling, collisions, game state)
//! - `session`: Start/restart, frame driving and score recording
//! - `renderer`: Snapshot to 2D draw commands
//! - `platform`: Keyboard mapping
//! - `highscores`: Top-5 leaderboard
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use session::Session;
pub use tuning::Tuning;

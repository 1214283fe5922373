//! Canvas rendering module
//!
//! Turns a simulation snapshot into a flat list of 2D draw commands. The host
//! replays the list onto its drawing surface; nothing here touches the browser.

pub mod draw;
pub mod shapes;

pub use draw::{DrawCommand, colors};

use crate::sim::Snapshot;

/// Draw commands for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Self {
        let grid = &snapshot.grid;
        let mut commands = shapes::road(grid);
        commands.extend(shapes::car(grid, snapshot.player));
        for entity in snapshot.entities() {
            commands.extend(shapes::sprite(grid, entity));
        }
        if snapshot.game_over {
            commands.extend(shapes::game_over_overlay(grid));
        }
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Text mirrored into the score/coins/speed display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub coins: String,
    pub speed: String,
}

impl Hud {
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Self {
        Self {
            score: snapshot.score.to_string(),
            coins: snapshot.coin_count.to_string(),
            speed: format!("{:.1}", snapshot.speed),
        }
    }
}

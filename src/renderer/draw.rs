//! Draw commands for a 2D canvas

use glam::Vec2;
use serde::Serialize;

use crate::sim::Aabb;

/// One canvas operation. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: &'static str,
    },
    StrokeRect {
        origin: Vec2,
        size: Vec2,
        color: &'static str,
        line_width: f32,
    },
    /// Dashed line, `dash` is (on, off) lengths
    DashedLine {
        from: Vec2,
        to: Vec2,
        color: &'static str,
        line_width: f32,
        dash: (f32, f32),
    },
    /// Centered text
    Text {
        pos: Vec2,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

impl DrawCommand {
    pub fn fill(origin: Vec2, size: Vec2, color: &'static str) -> Self {
        DrawCommand::FillRect {
            origin,
            size,
            color,
        }
    }

    pub fn fill_box(aabb: &Aabb, color: &'static str) -> Self {
        Self::fill(aabb.min.as_vec2(), aabb.size().as_vec2(), color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const ROAD: &str = "#0a0a0a";
    pub const LANE_EVEN: &str = "#131313";
    pub const LANE_ODD: &str = "#161616";
    pub const LANE_DIVIDER: &str = "#333";
    pub const PLAYER: &str = "#35e85d";
    pub const PLAYER_STRIPE: &str = "#0b0b0b";
    pub const OBSTACLE: &str = "#e84545";
    pub const COIN: &str = "#ffea73";
    pub const COIN_RIM: &str = "#ffdf6e";
    pub const BOOST: &str = "#25c2c2";
    pub const BOOST_CORE: &str = "#0c3b3b";
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.65)";
    pub const TEXT: &str = "#fff";
}

/// Fonts used by overlay text
pub mod fonts {
    pub const TITLE: &str = "24px \"Press Start 2P\", monospace";
    pub const SUBTITLE: &str = "16px \"Press Start 2P\", monospace";
}

//! Shape generation for the road, the car and scrolling sprites

use glam::Vec2;

use super::draw::{DrawCommand, colors, fonts};
use crate::sim::{Entity, EntityKind, LaneGrid, Player, entity_box, player_box};

/// Canvas point from simulation coordinates
#[inline]
fn point(x: f64, y: f64) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

/// Background, alternating lane shading and dashed dividers
pub fn road(grid: &LaneGrid) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(grid.lane_count * 2 + 1);
    let surface = point(grid.width, grid.height);

    commands.push(DrawCommand::fill(
        Vec2::ZERO,
        surface,
        colors::ROAD,
    ));

    for lane in 0..grid.lane_count {
        let color = if lane % 2 == 0 {
            colors::LANE_EVEN
        } else {
            colors::LANE_ODD
        };
        commands.push(DrawCommand::fill(
            point(grid.lane_left(lane), 0.0),
            point(grid.lane_width(), grid.height),
            color,
        ));
    }

    for lane in 1..grid.lane_count {
        let x = grid.lane_left(lane);
        commands.push(DrawCommand::DashedLine {
            from: point(x, 0.0),
            to: point(x, grid.height),
            color: colors::LANE_DIVIDER,
            line_width: 4.0,
            dash: (16.0, 12.0),
        });
    }

    commands
}

/// Car body with a dark stripe near each end
pub fn car(grid: &LaneGrid, player: &Player) -> Vec<DrawCommand> {
    let body = player_box(grid, player);
    let origin = body.min.as_vec2();
    let stripe = point(player.width - 8.0, 6.0);
    vec![
        DrawCommand::fill_box(&body, colors::PLAYER),
        DrawCommand::fill(origin + Vec2::new(4.0, 6.0), stripe, colors::PLAYER_STRIPE),
        DrawCommand::fill(
            origin + point(4.0, player.height - 12.0),
            stripe,
            colors::PLAYER_STRIPE,
        ),
    ]
}

/// Square sprite for an obstacle, coin or boost
pub fn sprite(grid: &LaneGrid, entity: &Entity) -> Vec<DrawCommand> {
    let bounds = entity_box(grid, entity);
    let inset_origin = bounds.min.as_vec2() + Vec2::splat(4.0);
    let inset_size = Vec2::splat((entity.size - 8.0) as f32);

    match entity.kind {
        EntityKind::Obstacle => vec![DrawCommand::fill_box(&bounds, colors::OBSTACLE)],
        EntityKind::Coin => vec![
            DrawCommand::fill_box(&bounds, colors::COIN),
            DrawCommand::StrokeRect {
                origin: inset_origin,
                size: inset_size,
                color: colors::COIN_RIM,
                line_width: 3.0,
            },
        ],
        EntityKind::Boost => vec![
            DrawCommand::fill_box(&bounds, colors::BOOST),
            DrawCommand::fill(inset_origin, inset_size, colors::BOOST_CORE),
        ],
    }
}

/// Dimmed screen with the retry prompt
pub fn game_over_overlay(grid: &LaneGrid) -> Vec<DrawCommand> {
    let surface = point(grid.width, grid.height);
    let center = surface / 2.0;
    vec![
        DrawCommand::fill(
            Vec2::ZERO,
            surface,
            colors::OVERLAY,
        ),
        DrawCommand::Text {
            pos: center - Vec2::new(0.0, 20.0),
            text: "Game Over".to_string(),
            font: fonts::TITLE,
            color: colors::TEXT,
        },
        DrawCommand::Text {
            pos: center + Vec2::new(0.0, 16.0),
            text: "Press Start to retry".to_string(),
            font: fonts::SUBTITLE,
            color: colors::TEXT,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_layout() {
        let grid = LaneGrid::new(5, 400.0, 640.0);
        let commands = road(&grid);
        // background + 5 lanes + 4 dividers
        assert_eq!(commands.len(), 10);
        let dividers = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DashedLine { .. }))
            .count();
        assert_eq!(dividers, 4);
    }

    #[test]
    fn test_car_stripes_inside_body() {
        let grid = LaneGrid::new(5, 400.0, 640.0);
        let player = Player {
            lane: 2,
            y: 520.0,
            width: 48.0,
            height: 40.0,
        };
        let commands = car(&grid, &player);
        assert_eq!(
            commands[0],
            DrawCommand::fill(Vec2::new(176.0, 520.0), Vec2::new(48.0, 40.0), colors::PLAYER)
        );
        assert_eq!(
            commands[2],
            DrawCommand::fill(Vec2::new(180.0, 548.0), Vec2::new(40.0, 6.0), colors::PLAYER_STRIPE)
        );
    }

    #[test]
    fn test_sprite_decorations() {
        let grid = LaneGrid::new(5, 400.0, 640.0);
        let coin = Entity::above_top(EntityKind::Coin, 0, 32.0);
        let boost = Entity::above_top(EntityKind::Boost, 0, 32.0);
        let obstacle = Entity::above_top(EntityKind::Obstacle, 0, 40.0);
        assert!(matches!(sprite(&grid, &coin)[1], DrawCommand::StrokeRect { .. }));
        assert_eq!(sprite(&grid, &boost).len(), 2);
        assert_eq!(sprite(&grid, &obstacle).len(), 1);
    }
}

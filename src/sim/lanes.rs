//! Lane grid geometry
//!
//! The play surface is split into equal-width vertical lanes, indexed left to
//! right. Horizontal positions are always derived from a lane index.

use serde::Serialize;

use crate::tuning::Tuning;

/// Immutable partition of the surface into lanes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaneGrid {
    pub lane_count: usize,
    pub width: f64,
    pub height: f64,
}

impl LaneGrid {
    pub fn new(lane_count: usize, width: f64, height: f64) -> Self {
        Self {
            lane_count: lane_count.max(1),
            width,
            height,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.lane_count, tuning.surface_width, tuning.surface_height)
    }

    #[inline]
    pub fn lane_width(&self) -> f64 {
        self.width / self.lane_count as f64
    }

    /// Left edge of a lane
    #[inline]
    pub fn lane_left(&self, lane: usize) -> f64 {
        lane as f64 * self.lane_width()
    }

    /// Left edge of a box of `box_width` centered in `lane`
    #[inline]
    pub fn centered_x(&self, lane: usize, box_width: f64) -> f64 {
        self.lane_left(lane) + (self.lane_width() - box_width) / 2.0
    }

    #[inline]
    pub fn last_lane(&self) -> usize {
        self.lane_count - 1
    }

    pub fn contains(&self, lane: usize) -> bool {
        lane < self.lane_count
    }

    /// Clamp a signed lane index into the grid
    pub fn clamp_lane(&self, lane: i64) -> usize {
        lane.clamp(0, self.last_lane() as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_positions() {
        let grid = LaneGrid::new(5, 400.0, 640.0);
        assert_eq!(grid.lane_width(), 80.0);
        assert_eq!(grid.lane_left(0), 0.0);
        assert_eq!(grid.lane_left(4), 320.0);
        // 40px box centered in lane 2 (160..240)
        assert_eq!(grid.centered_x(2, 40.0), 180.0);
    }

    #[test]
    fn test_clamp_lane() {
        let grid = LaneGrid::new(5, 400.0, 640.0);
        assert_eq!(grid.clamp_lane(-1), 0);
        assert_eq!(grid.clamp_lane(3), 3);
        assert_eq!(grid.clamp_lane(99), 4);
        assert!(grid.contains(4));
        assert!(!grid.contains(5));
    }

    #[test]
    fn test_zero_lanes_becomes_one() {
        let grid = LaneGrid::new(0, 100.0, 100.0);
        assert_eq!(grid.lane_count, 1);
        assert_eq!(grid.clamp_lane(7), 0);
    }
}

//! Data-driven game balance
//!
//! Every gameplay constant lives here so a session can be rebuilt from JSON.
//! Persisted in LocalStorage on web, read from `LANE_RUNNER_TUNING` on native.

use serde::{Deserialize, Serialize};

use crate::sim::EntityKind;

/// Spawn cadence and footprint for one kind of scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    /// Spawn when `tick % period == 0`
    pub period: u64,
    /// Square side length (pixels)
    pub size: f64,
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play surface ===
    pub lane_count: usize,
    pub surface_width: f64,
    pub surface_height: f64,

    // === Player car ===
    pub player_start_lane: usize,
    /// Distance from the bottom edge to the top of the car
    pub player_row_offset: f64,
    /// Car width as a fraction of lane width
    pub player_width_ratio: f64,
    pub player_height: f64,

    // === Speed ===
    pub base_speed: f64,
    /// Added to speed every tick
    pub speed_ramp: f64,

    // === Spawning ===
    pub obstacle: SpawnRule,
    pub coin: SpawnRule,
    pub boost: SpawnRule,

    // === Rewards ===
    pub coin_reward: u64,
    pub boost_bonus: f64,
    pub boost_duration: u32,

    /// Leaderboard length
    pub max_high_scores: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_count: 5,
            surface_width: 400.0,
            surface_height: 640.0,

            player_start_lane: 2,
            player_row_offset: 120.0,
            player_width_ratio: 0.6,
            player_height: 40.0,

            base_speed: 4.0,
            speed_ramp: 0.0008,

            obstacle: SpawnRule {
                period: 70,
                size: 40.0,
            },
            coin: SpawnRule {
                period: 120,
                size: 32.0,
            },
            boost: SpawnRule {
                period: 300,
                size: 32.0,
            },

            coin_reward: 100,
            boost_bonus: 3.0,
            boost_duration: 240,

            max_high_scores: 5,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "lane_runner_tuning";

    /// Environment variable naming a tuning JSON file (native only)
    pub const ENV_VAR: &'static str = "LANE_RUNNER_TUNING";

    /// Spawn rule for a given entity kind
    pub fn rule(&self, kind: EntityKind) -> SpawnRule {
        match kind {
            EntityKind::Obstacle => self.obstacle,
            EntityKind::Coin => self.coin,
            EntityKind::Boost => self.boost,
        }
    }

    /// Parse tuning from JSON, missing fields take their defaults.
    /// Returns None (and logs) when the text is not a valid tuning object.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) => Some(tuning.sanitized()),
            Err(err) => {
                log::warn!("Ignoring malformed tuning data: {}", err);
                None
            }
        }
    }

    /// Clamp every value into a range the simulation can run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.lane_count == 0 {
            log::warn!("lane_count must be at least 1, using 1");
            self.lane_count = 1;
        }
        if self.player_start_lane >= self.lane_count {
            let lane = self.lane_count / 2;
            log::warn!(
                "player_start_lane {} outside {} lanes, using {}",
                self.player_start_lane,
                self.lane_count,
                lane
            );
            self.player_start_lane = lane;
        }
        if !(self.surface_width > 0.0) {
            log::warn!("surface_width must be positive, using default");
            self.surface_width = defaults.surface_width;
        }
        if !(self.surface_height > 0.0) {
            log::warn!("surface_height must be positive, using default");
            self.surface_height = defaults.surface_height;
        }
        if !(self.player_width_ratio > 0.0 && self.player_width_ratio <= 1.0) {
            log::warn!("player_width_ratio must be in (0, 1], using default");
            self.player_width_ratio = defaults.player_width_ratio;
        }
        if !(self.player_height > 0.0) {
            self.player_height = defaults.player_height;
        }
        if !(self.base_speed > 0.0) {
            log::warn!("base_speed must be positive, using default");
            self.base_speed = defaults.base_speed;
        }
        if !(self.speed_ramp >= 0.0) {
            self.speed_ramp = 0.0;
        }
        if !(self.boost_bonus >= 0.0) {
            self.boost_bonus = 0.0;
        }
        for (name, rule, fallback) in [
            ("obstacle", &mut self.obstacle, defaults.obstacle),
            ("coin", &mut self.coin, defaults.coin),
            ("boost", &mut self.boost, defaults.boost),
        ] {
            if rule.period == 0 {
                log::warn!("{} spawn period must be at least 1, using {}", name, fallback.period);
                rule.period = fallback.period;
            }
            if !(rule.size > 0.0) {
                log::warn!("{} size must be positive, using {}", name, fallback.size);
                rule.size = fallback.size;
            }
        }
        if self.max_high_scores == 0 {
            self.max_high_scores = defaults.max_high_scores;
        }

        self
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(tuning) = Self::from_json(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from the file named by `LANE_RUNNER_TUNING`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json)
                .inspect(|_| log::info!("Loaded tuning from {}", path.to_string_lossy()))
                .unwrap_or_default(),
            Err(err) => {
                log::warn!(
                    "Could not read tuning file {}: {}",
                    path.to_string_lossy(),
                    err
                );
                Self::default()
            }
        }
    }
}

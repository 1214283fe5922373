//! High score leaderboard system
//!
//! Persisted to LocalStorage as a plain JSON array of scores, tracks the top 5.

/// Default number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// High score leaderboard, sorted descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u64>,
    limit: usize,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "lane_runner_scores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::with_limit(MAX_HIGH_SCORES)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            scores: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Build from stored JSON. Anything that is not an array of non-negative
    /// integers counts as no history.
    pub fn from_json(json: &str, limit: usize) -> Self {
        let mut board = Self::with_limit(limit);
        match serde_json::from_str::<Vec<u64>>(json) {
            Ok(mut scores) => {
                scores.sort_unstable_by(|a, b| b.cmp(a));
                scores.truncate(board.limit);
                board.scores = scores;
            }
            Err(err) => {
                log::warn!("Discarding malformed high score data: {}", err);
            }
        }
        board
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.scores).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add a final score. Returns the rank achieved (1-indexed) or None if it
    /// did not make the list.
    pub fn record_score(&mut self, score: u64) -> Option<usize> {
        // Equal scores keep their earlier position
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());

        if pos >= self.limit {
            return None;
        }

        self.scores.insert(pos, score);
        self.scores.truncate(self.limit);
        Some(pos + 1)
    }

    /// Scores in descending order
    pub fn top_scores(&self) -> &[u64] {
        &self.scores
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.scores.first().copied()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Text lines for the leaderboard list
    pub fn leaderboard_lines(&self) -> Vec<String> {
        if self.scores.is_empty() {
            return vec!["No scores yet".to_string()];
        }
        self.scores.iter().map(|s| format!("{} pts", s)).collect()
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(limit: usize) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let scores = Self::from_json(&json, limit);
                log::info!("Loaded {} high scores", scores.scores.len());
                return scores;
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::with_limit(limit)
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("High scores saved ({} entries)", self.scores.len());
        }
    }

    /// Native keeps the board in memory for the life of the process
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(limit: usize) -> Self {
        Self::with_limit(limit)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("High scores kept in memory ({} entries)", self.scores.len());
    }
}

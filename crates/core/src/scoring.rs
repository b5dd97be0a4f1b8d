//! Scoring module - classic line-clear rewards and level progression
//!
//! - Clearing 1, 2, 3 or 4 rows in one clear cycle awards 40, 100, 300 or 1200.
//! - Level is `score / 100 + 1`; speed mirrors level.
//! - Speed selects the gravity interval from [`DROP_INTERVALS`].

use crate::types::{DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LINE_SCORES, POINTS_PER_LEVEL};

/// Points for clearing `rows` rows at once.
///
/// Clears larger than four score 1200 per full group of four plus the table
/// value of the remainder.
///
/// ```
/// use blockfall_core::scoring::points_for_rows;
///
/// assert_eq!(points_for_rows(0), 0);
/// assert_eq!(points_for_rows(4), 1200);
/// assert_eq!(points_for_rows(6), 1300);
/// ```
pub fn points_for_rows(rows: usize) -> u32 {
    let max = LINE_SCORES.len() - 1;
    let tetrises = (rows / max) as u32;
    LINE_SCORES[max]
        .saturating_mul(tetrises)
        .saturating_add(LINE_SCORES[rows % max])
}

/// Level reached at `score`.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Gravity interval for a speed (1-based).
pub fn drop_interval_ms(speed: u32) -> u32 {
    let index = speed.max(1) as usize - 1;
    DROP_INTERVALS
        .get(index)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Score, level and speed of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    score: u32,
    level: u32,
    speed: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            speed: 1,
        }
    }
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Award points for a clear of `cleared_rows` rows; returns the award.
    pub fn add_points(&mut self, cleared_rows: usize) -> u32 {
        let points = points_for_rows(cleared_rows);
        self.score = self.score.saturating_add(points);
        points
    }

    /// Recompute level and speed from the score. Returns true when the
    /// level changed.
    pub fn level_up(&mut self) -> bool {
        let level = level_for_score(self.score);
        let changed = level != self.level;
        self.level = level;
        self.speed = level;
        changed
    }

    /// Gravity interval at the current speed.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(points_for_rows(0), 0);
        assert_eq!(points_for_rows(1), 40);
        assert_eq!(points_for_rows(2), 100);
        assert_eq!(points_for_rows(3), 300);
        assert_eq!(points_for_rows(4), 1200);
    }

    #[test]
    fn test_large_clears_chunk_by_four() {
        assert_eq!(points_for_rows(5), 1240);
        assert_eq!(points_for_rows(8), 2400);
        assert_eq!(points_for_rows(11), 2700);
    }

    #[test]
    fn test_level_from_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(99), 1);
        assert_eq!(level_for_score(100), 2);
        assert_eq!(level_for_score(250), 3);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(drop_interval_ms(0), 1000);
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(9), 160);
        assert_eq!(drop_interval_ms(10), DROP_INTERVAL_FLOOR_MS);
        assert_eq!(drop_interval_ms(500), DROP_INTERVAL_FLOOR_MS);
    }

    #[test]
    fn test_score_progression() {
        let mut score = Score::new();
        assert_eq!((score.score(), score.level(), score.speed()), (0, 1, 1));

        assert_eq!(score.add_points(3), 300);
        assert!(score.level_up());
        assert_eq!((score.score(), score.level(), score.speed()), (300, 4, 4));
        assert_eq!(score.drop_interval_ms(), 500);

        score.add_points(0);
        assert!(!score.level_up());
        assert_eq!(score.score(), 300);
    }
}

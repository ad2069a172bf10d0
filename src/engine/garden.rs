//! Garden progression derived from the cumulative score.

use crate::constants::GARDEN_LEVEL_THRESHOLDS;
use std::fmt;

/// Returns the garden level (0–7) for a score.
///
/// Each level starts at the matching entry of the threshold table
/// (0, 10, 30, 60, 100, 150, 220, 300); any score of 300 or more is level 7.
///
/// # Examples
///
/// ```
/// use moodgarden::engine::garden_level;
///
/// assert_eq!(garden_level(0), 0);
/// assert_eq!(garden_level(299), 6);
/// assert_eq!(garden_level(300), 7);
/// ```
pub fn garden_level(score: u32) -> u8 {
    GARDEN_LEVEL_THRESHOLDS
        .iter()
        .rposition(|&threshold| score >= threshold)
        .unwrap_or(0) as u8
}

/// Points still needed to reach the next level, or `None` at the top level.
pub fn points_to_next_level(score: u32) -> Option<u32> {
    let next = garden_level(score) as usize + 1;
    GARDEN_LEVEL_THRESHOLDS
        .get(next)
        .map(|&threshold| threshold - score)
}

/// The visual stage shown for each garden level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GardenStage {
    Seed,
    Sprout,
    SmallFlower,
    BloomingFlower,
    Butterfly,
    SecondFlower,
    Sun,
    FullGarden,
}

impl GardenStage {
    const BY_LEVEL: [GardenStage; 8] = [
        GardenStage::Seed,
        GardenStage::Sprout,
        GardenStage::SmallFlower,
        GardenStage::BloomingFlower,
        GardenStage::Butterfly,
        GardenStage::SecondFlower,
        GardenStage::Sun,
        GardenStage::FullGarden,
    ];

    pub fn from_score(score: u32) -> Self {
        Self::BY_LEVEL[garden_level(score) as usize]
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            GardenStage::Seed => "Seed",
            GardenStage::Sprout => "Sprout",
            GardenStage::SmallFlower => "Small flower",
            GardenStage::BloomingFlower => "Blooming flower",
            GardenStage::Butterfly => "Butterfly",
            GardenStage::SecondFlower => "Second flower",
            GardenStage::Sun => "Sun",
            GardenStage::FullGarden => "Full garden",
        }
    }
}

impl fmt::Display for GardenStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_breakpoints() {
        let cases = [
            (0, 0),
            (9, 0),
            (10, 1),
            (29, 1),
            (30, 2),
            (59, 2),
            (60, 3),
            (99, 3),
            (100, 4),
            (149, 4),
            (150, 5),
            (219, 5),
            (220, 6),
            (299, 6),
            (300, 7),
            (u32::MAX, 7),
        ];
        for (score, level) in cases {
            assert_eq!(garden_level(score), level, "score {}", score);
        }
    }

    #[test]
    fn test_level_is_non_decreasing() {
        let mut previous = 0;
        for score in 0..400 {
            let level = garden_level(score);
            assert!(level >= previous);
            assert!(level - previous <= 1);
            previous = level;
        }
    }

    #[test]
    fn test_points_to_next_level() {
        assert_eq!(points_to_next_level(0), Some(10));
        assert_eq!(points_to_next_level(25), Some(5));
        assert_eq!(points_to_next_level(299), Some(1));
        assert_eq!(points_to_next_level(300), None);
    }

    #[test]
    fn test_stage_matches_level() {
        assert_eq!(GardenStage::from_score(0), GardenStage::Seed);
        assert_eq!(GardenStage::from_score(105), GardenStage::Butterfly);
        assert_eq!(GardenStage::from_score(1000), GardenStage::FullGarden);
        for score in [0, 10, 30, 60, 100, 150, 220, 300] {
            assert_eq!(GardenStage::from_score(score).level(), garden_level(score));
        }
    }
}

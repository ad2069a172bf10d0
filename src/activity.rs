//! The catalogue of wellness activities and the points each one awards.

use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// A mini-activity the user can complete for points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Write down things you are grateful for.
    Gratitude,
    Breathing,
    Drawing,
    WordSearch,
    ZenGarden,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Gratitude,
        ActivityKind::Breathing,
        ActivityKind::Drawing,
        ActivityKind::WordSearch,
        ActivityKind::ZenGarden,
    ];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            ActivityKind::Gratitude => "Journal",
            ActivityKind::Breathing => "Breathe",
            ActivityKind::Drawing => "Doodle",
            ActivityKind::WordSearch => "Word Find",
            ActivityKind::ZenGarden => "Zen Garden",
        }
    }

    /// Identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            ActivityKind::Gratitude => "journal",
            ActivityKind::Breathing => "breathing",
            ActivityKind::Drawing => "doodle",
            ActivityKind::WordSearch => "word-search",
            ActivityKind::ZenGarden => "zen-garden",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityKind::Gratitude => "Write down three things you are grateful for today.",
            ActivityKind::Breathing => "Follow the guide to breathe deeply for one minute.",
            ActivityKind::Drawing => "Draw anything that makes you happy for a few moments.",
            ActivityKind::WordSearch => "Find the hidden positive words.",
            ActivityKind::ZenGarden => "Relax and create patterns in the sand.",
        }
    }

    /// Points awarded on completion.
    pub fn points(&self) -> u32 {
        match self {
            ActivityKind::Gratitude => 15,
            ActivityKind::Breathing => 10,
            ActivityKind::Drawing => 20,
            ActivityKind::WordSearch => 20,
            ActivityKind::ZenGarden => 15,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| {
                let slugs: Vec<&str> = ActivityKind::ALL.iter().map(ActivityKind::slug).collect();
                AppError::Activity(format!(
                    "Unknown activity '{}'. Choose one of: {}",
                    s.trim(),
                    slugs.join(", ")
                ))
            })
    }
}

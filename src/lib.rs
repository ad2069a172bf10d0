/*!
# moodgarden

moodgarden is the core of a small wellness tracker. Checking in with a mood
each day builds a streak, finishing short activities earns points, and the
points grow a garden through eight visual stages.

## Core Features

- Score and garden level derived from it
- Daily mood check-in with a consecutive-day streak and milestone bonuses
- Mood history with summary statistics
- Gratitude journal entries
- Word-search puzzle generation and selection matching

## Architecture

- `engine`: `GardenEngine`, the owned state machine for score, streak, moods and journal
- `store`: the `KeyValueStore` trait with memory, JSON-file and SQLite backends
- `clock`: injectable calendar (`SystemClock`, `FixedClock`)
- `puzzle`: word-search generator, line selection and session tracking
- `mood`, `journal`, `activity`, `content`: domain types and static content
- `cli`, `config`, `errors`, `constants`: application plumbing

## Usage Example

```rust
use moodgarden::clock::FixedClock;
use moodgarden::store::MemoryStore;
use moodgarden::{ActivityKind, GardenEngine, Mood};
use chrono::NaiveDate;

let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
let mut engine = GardenEngine::load(MemoryStore::new(), &clock);

engine.select_mood(Mood::Happy);
engine.complete_activity(ActivityKind::Breathing.points());

assert_eq!(engine.score(), 10);
assert_eq!(engine.garden_level(), 1);
```
*/

/// Wellness activities and their point values
pub mod activity;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Calendar access
pub mod clock;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Affirmations, prompts and word lists
pub mod content;
/// The garden state machine
pub mod engine;
/// Error types and utilities for error handling
pub mod errors;
/// Gratitude journal entries
pub mod journal;
/// Moods and mood history
pub mod mood;
/// Word-search puzzles
pub mod puzzle;
/// Persistent key-value storage
pub mod store;

// Re-export important types for convenience
pub use activity::ActivityKind;
pub use cli::CliArgs;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use engine::{GardenEngine, MoodSelection};
pub use errors::{AppError, AppResult};
pub use mood::Mood;
pub use puzzle::{PuzzleGenerator, WordSearchSession};
pub use store::KeyValueStore;

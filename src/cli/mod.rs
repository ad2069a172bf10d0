use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_GRID_SIZE, DEFAULT_WORDS_TO_PLACE};
use clap::{Parser, Subcommand};

/// Grow a garden by checking in with your mood every day
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Log output format: text or json (overrides MOODGARDEN_LOG_FORMAT)
    #[clap(long, global = true)]
    pub log_format: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show score, garden level, streak and today's check-in
    Status,

    /// Record today's mood (happy, calm, stressed, sad, excited)
    Mood { mood: String },

    /// Complete an activity: breathing, doodle or zen-garden
    Activity { kind: String },

    /// Write, list or delete gratitude journal entries
    Journal {
        #[clap(subcommand)]
        action: JournalAction,
    },

    /// Show mood history and stats
    History,

    /// Print a random affirmation
    Affirmation,

    /// Play a word search; selections are read from stdin as `r1 c1 r2 c2`
    WordSearch {
        /// Seed for a reproducible puzzle
        #[clap(long)]
        seed: Option<u64>,

        /// Grid side length
        #[clap(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,

        /// Number of words to hide
        #[clap(long, default_value_t = DEFAULT_WORDS_TO_PLACE)]
        words: usize,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum JournalAction {
    /// Add an entry (at least 25 characters)
    Add {
        /// Entry text; multiple words are joined with spaces
        #[clap(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List entries, newest first
    List,
    /// Delete an entry by id
    Delete { id: String },
    /// Print a random writing prompt
    Prompt,
}

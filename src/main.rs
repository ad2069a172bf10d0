/*!
# moodgarden

Command-line front end for the mood garden: check in with a mood each day,
complete small wellness activities, keep a gratitude journal, and watch the
garden grow.

## Usage

```text
moodgarden [OPTIONS] <COMMAND>

Commands:
  status       Show score, garden level, streak and today's check-in
  mood         Record today's mood (happy, calm, stressed, sad, excited)
  activity     Complete an activity: breathing, doodle or zen-garden
  journal      Write, list or delete gratitude journal entries
  history      Show mood history and stats
  affirmation  Print a random affirmation
  word-search  Play a word search; selections are read from stdin

Options:
      --log-format <LOG_FORMAT>  Log output format: text or json
  -v, --verbose                  Print verbose output
```

## Configuration

- `MOODGARDEN_DIR`: where garden state is kept (defaults to `~/.local/share/moodgarden`)
- `MOODGARDEN_STORE`: `json` (default) or `sqlite`
- `MOODGARDEN_LOG_FORMAT`: `text` (default) or `json`
- `MOODGARDEN_TODAY`: pin the calendar date (`YYYY-MM-DD`)
- `RUST_LOG`: log filter (defaults to `info`, or `debug` with `--verbose`)
*/

use clap::Parser;
use moodgarden::activity::ActivityKind;
use moodgarden::cli::{CliArgs, Command, JournalAction};
use moodgarden::clock::{Clock, FixedClock, SystemClock};
use moodgarden::config::{Config, LogFormat};
use moodgarden::constants::{
    DEFAULT_LOG_LEVEL, MIN_JOURNAL_LENGTH, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use moodgarden::content::{random_affirmation, random_journal_prompt, POSITIVE_WORDS};
use moodgarden::engine::GardenEngine;
use moodgarden::errors::{AppError, AppResult};
use moodgarden::journal::JournalEntry;
use moodgarden::mood::Mood;
use moodgarden::puzzle::{Cell, Puzzle, PuzzleGenerator, WordSearchSession};
use moodgarden::store::{self, KeyValueStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let args = CliArgs::parse();
    let config = Config::load()?;

    let log_format = match args.log_format.as_deref() {
        Some(value) => value.parse()?,
        None => config.log_format,
    };
    init_tracing(log_format, args.verbose);

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    debug!(?args, "Parsed CLI arguments");
    debug!(?config, "Loaded configuration");
    config.validate()?;

    let store = store::open_or_fallback(&config);
    match config.today_override {
        Some(today) => {
            info!(%today, "Using pinned calendar date");
            dispatch(args.command, GardenEngine::load(store, FixedClock::on(today)))
        }
        None => dispatch(args.command, GardenEngine::load(store, SystemClock)),
    }
}

fn init_tracing(format: LogFormat, verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Text => builder.init(),
    }
}

fn dispatch<S: KeyValueStore, C: Clock>(
    command: Command,
    mut engine: GardenEngine<S, C>,
) -> AppResult<()> {
    match command {
        Command::Status => print_status(&engine),
        Command::Mood { mood } => select_mood(&mut engine, mood.parse()?),
        Command::Activity { kind } => complete_activity(&mut engine, kind.parse()?)?,
        Command::Journal { action } => journal(&mut engine, action)?,
        Command::History => print_history(&engine),
        Command::Affirmation => println!("{}", random_affirmation(&mut rand::thread_rng())),
        Command::WordSearch { seed, size, words } => {
            let generator = PuzzleGenerator::new(size, words)?;
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let puzzle = generator.generate(POSITIVE_WORDS, &mut rng);
            word_search(&mut engine, puzzle, io::stdin().lock())?;
        }
    }
    Ok(())
}

fn print_status<S: KeyValueStore, C: Clock>(engine: &GardenEngine<S, C>) {
    println!(
        "Garden: level {} ({}), score {}",
        engine.garden_level(),
        engine.garden_stage(),
        engine.score()
    );
    match engine.points_to_next_level() {
        Some(points) => println!("Next level in {} points", points),
        None => println!("Your garden is fully grown"),
    }
    println!("Streak: {} day(s)", engine.streak());
    if engine.is_mood_selected_today() {
        println!("Today's mood: recorded");
    } else {
        println!("Today's mood: not recorded yet");
    }
}

fn select_mood<S: KeyValueStore, C: Clock>(engine: &mut GardenEngine<S, C>, mood: Mood) {
    let already_chosen = engine.is_mood_selected_today();
    let outcome = engine.select_mood(mood);

    if already_chosen {
        println!("Mood already recorded today");
    } else {
        println!("Feeling {} {} today", mood, mood.icon());
    }
    if outcome.bonus_points > 0 {
        println!(
            "Streak milestone! {} days earns {} bonus points",
            outcome.streak, outcome.bonus_points
        );
    }
    println!("Streak: {} day(s)", outcome.streak);
}

fn complete_activity<S: KeyValueStore, C: Clock>(
    engine: &mut GardenEngine<S, C>,
    kind: ActivityKind,
) -> AppResult<()> {
    match kind {
        ActivityKind::Gratitude => Err(AppError::Activity(
            "Use `moodgarden journal add` to complete the journal activity".to_string(),
        )),
        ActivityKind::WordSearch => Err(AppError::Activity(
            "Use `moodgarden word-search` to complete the word search".to_string(),
        )),
        _ => {
            engine.complete_activity(kind.points());
            println!("{} complete! +{} points", kind, kind.points());
            println!("Score: {}", engine.score());
            Ok(())
        }
    }
}

fn journal<S: KeyValueStore, C: Clock>(
    engine: &mut GardenEngine<S, C>,
    action: JournalAction,
) -> AppResult<()> {
    match action {
        JournalAction::Add { text } => {
            let text = text.join(" ");
            let length = JournalEntry::trimmed_len(&text);
            if length < MIN_JOURNAL_LENGTH {
                return Err(AppError::Journal(format!(
                    "Entry is {} characters; write at least {}",
                    length, MIN_JOURNAL_LENGTH
                )));
            }

            let entry = engine.add_journal_entry(&text);
            let points = ActivityKind::Gratitude.points();
            engine.complete_activity(points);
            println!("Saved entry {}", entry.id);
            println!("+{} points", points);
        }
        JournalAction::List => {
            if engine.journal_entries().is_empty() {
                println!("No journal entries yet");
            }
            for entry in engine.journal_entries().iter().rev() {
                println!(
                    "{}  {}  {}",
                    entry.id,
                    entry.date.format("%Y-%m-%d %H:%M"),
                    entry.text
                );
            }
        }
        JournalAction::Delete { id } => {
            if engine.delete_journal_entry(&id) {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
        }
        JournalAction::Prompt => println!("{}", random_journal_prompt(&mut rand::thread_rng())),
    }
    Ok(())
}

fn print_history<S: KeyValueStore, C: Clock>(engine: &GardenEngine<S, C>) {
    let stats = engine.mood_stats();
    if stats.days_logged == 0 {
        println!("No moods recorded yet");
        return;
    }

    println!("Days logged: {}", stats.days_logged);
    if let Some(mood) = stats.most_frequent {
        println!("Most frequent: {} {}", mood, mood.icon());
    }
    for (mood, count) in &stats.counts {
        println!("  {:<9}{}", mood.name(), count);
    }
    println!("Recent:");
    for entry in &stats.recent {
        println!("  {}  {} {}", entry.date, entry.mood, entry.mood.icon());
    }
}

fn word_search<S: KeyValueStore, C: Clock, R: BufRead>(
    engine: &mut GardenEngine<S, C>,
    puzzle: Puzzle,
    input: R,
) -> AppResult<()> {
    if puzzle.placed.is_empty() {
        println!("No words could be placed; try a larger grid");
        return Ok(());
    }

    print_puzzle(&puzzle);
    let total = puzzle.placed.len();
    let mut session = WordSearchSession::new(puzzle);

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((start, end)) = parse_selection(line) else {
            println!("Enter a selection as: row col row col");
            continue;
        };

        match session.select(start, end) {
            Some(word) => println!("Found {} ({}/{})", word, session.found().len(), total),
            None => println!("No word there"),
        }

        if session.is_complete() {
            let points = ActivityKind::WordSearch.points();
            engine.complete_activity(points);
            println!("All words found! +{} points", points);
            return Ok(());
        }
    }

    println!("Found {} of {} words", session.found().len(), total);
    Ok(())
}

fn print_puzzle(puzzle: &Puzzle) {
    let size = puzzle.grid.size();
    let header: Vec<String> = (0..size).map(|col| format!("{:>2}", col)).collect();
    println!("   {}", header.join(""));
    for (row, letters) in puzzle.grid.rows().enumerate() {
        let line: Vec<String> = letters.iter().map(|c| format!("{:>2}", c)).collect();
        println!("{:>2} {}", row, line.join(""));
    }
    let words: Vec<&str> = puzzle.words().collect();
    println!("Words: {}", words.join(", "));
}

fn parse_selection(line: &str) -> Option<(Cell, Cell)> {
    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()?;

    match numbers.as_slice() {
        [r1, c1, r2, c2] => Some((Cell::new(*r1, *c1), Cell::new(*r2, *c2))),
        _ => None,
    }
}

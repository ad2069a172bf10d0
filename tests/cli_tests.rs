use moodgarden::content::POSITIVE_WORDS;
use moodgarden::puzzle::PuzzleGenerator;
use predicates::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::tempdir;

use test_helpers::{moodgarden_command, TEST_DATE};

#[test]
fn test_cli_requires_subcommand() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_status_on_fresh_garden() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("level 0 (Seed), score 0"))
        .stdout(predicate::str::contains("Next level in 10 points"))
        .stdout(predicate::str::contains("Streak: 0 day(s)"))
        .stdout(predicate::str::contains("not recorded yet"));
}

#[test]
fn test_mood_twice_same_day() {
    let dir = tempdir().unwrap();

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["mood", "happy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feeling Happy"))
        .stdout(predicate::str::contains("Streak: 1 day(s)"));

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["mood", "sad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood already recorded today"))
        .stdout(predicate::str::contains("Streak: 1 day(s)"));

    moodgarden_command(dir.path(), TEST_DATE)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Days logged: 1"))
        .stdout(predicate::str::contains("Most frequent: Happy"));
}

#[test]
fn test_streak_milestone_across_days() {
    let dir = tempdir().unwrap();

    for day in ["2024-01-15", "2024-01-16"] {
        moodgarden_command(dir.path(), day)
            .args(["mood", "calm"])
            .assert()
            .success();
    }

    moodgarden_command(dir.path(), "2024-01-17")
        .args(["mood", "calm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak milestone! 3 days earns 25 bonus points"))
        .stdout(predicate::str::contains("Streak: 3 day(s)"));

    moodgarden_command(dir.path(), "2024-01-17")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("level 1 (Sprout), score 25"))
        .stdout(predicate::str::contains("Today's mood: recorded"));

    // Skipping a day starts the streak over.
    moodgarden_command(dir.path(), "2024-01-19")
        .args(["mood", "calm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak: 1 day(s)"));
}

#[test]
fn test_unknown_mood_fails() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .args(["mood", "grumpy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mood 'grumpy'"));
}

#[test]
fn test_activity_awards_points() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .args(["activity", "doodle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Doodle complete! +20 points"));

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["activity", "zen_garden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 35"));

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["activity", "journal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("journal add"));
}

#[test]
fn test_journal_add_list_delete() {
    let dir = tempdir().unwrap();

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["journal", "add", "too", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("write at least 25"));

    let output = moodgarden_command(dir.path(), TEST_DATE)
        .args([
            "journal",
            "add",
            "Grateful for a slow breakfast with friends",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("+15 points"))
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Saved entry "))
        .unwrap()
        .to_string();

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slow breakfast"))
        .stdout(predicate::str::contains(id.as_str()));

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["journal", "delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["journal", "delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id"));

    moodgarden_command(dir.path(), TEST_DATE)
        .args(["journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries yet"));
}

#[test]
fn test_sqlite_backend_persists() {
    let dir = tempdir().unwrap();

    moodgarden_command(dir.path(), TEST_DATE)
        .env("MOODGARDEN_STORE", "sqlite")
        .args(["activity", "breathing"])
        .assert()
        .success();

    moodgarden_command(dir.path(), TEST_DATE)
        .env("MOODGARDEN_STORE", "sqlite")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("score 10"));

    assert!(dir.path().join("moodgarden.db").exists());
}

#[test]
fn test_invalid_today_override_is_config_error() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), "15/01/2024")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MOODGARDEN_TODAY"));
}

#[test]
fn test_word_search_with_no_input_reports_progress() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .args(["word-search", "--seed", "7"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:"))
        .stdout(predicate::str::contains("Found 0 of"));
}

#[test]
fn test_word_search_grid_too_small_for_any_word() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .args(["word-search", "--seed", "1", "--size", "1", "--words", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words could be placed"));
}

#[test]
fn test_word_search_rejects_huge_grid() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .args(["word-search", "--seed", "1", "--size", "4294967296"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grid size must be at most 100"));
}

#[test]
fn test_json_log_format() {
    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .env("RUST_LOG", "info")
        .args(["--log-format", "json", "activity", "breathing"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"correlation_id\""));
}

#[test]
fn test_word_search_completion_awards_points() {
    // The binary builds the same puzzle from the same seed.
    let puzzle = PuzzleGenerator::default()
        .generate(POSITIVE_WORDS, &mut ChaCha8Rng::seed_from_u64(11));
    assert!(!puzzle.placed.is_empty());

    let mut input = String::from("not a selection\n0 0 1 2\n");
    for placed in &puzzle.placed {
        let (start, end) = (placed.start().unwrap(), placed.end().unwrap());
        // Select backwards; reversed reading still counts.
        input.push_str(&format!("{} {} {} {}\n", end.row, end.col, start.row, start.col));
    }

    let dir = tempdir().unwrap();
    moodgarden_command(dir.path(), TEST_DATE)
        .args(["word-search", "--seed", "11"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a selection as: row col row col"))
        .stdout(predicate::str::contains("All words found! +20 points"));

    moodgarden_command(dir.path(), TEST_DATE)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("score 20"));
}

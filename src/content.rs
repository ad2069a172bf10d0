//! Static content: affirmations, journal prompts, and the word-search pool.

use rand::seq::SliceRandom;
use rand::Rng;

pub const AFFIRMATIONS: &[&str] = &[
    "You are capable of amazing things.",
    "Today is a new day, full of possibilities.",
    "Believe in yourself and all that you are.",
    "Your positive attitude is your greatest strength.",
    "Every small step you take is progress.",
    "You are resilient, strong, and brave.",
    "Embrace the journey and trust the process.",
    "Your potential is limitless.",
];

pub const JOURNAL_PROMPTS: &[&str] = &[
    "What is one small thing that brought you joy today?",
    "Describe a person you're grateful for and why.",
    "What is a recent accomplishment, big or small, that you're proud of?",
    "Think about a beautiful place you've been. What did you love about it?",
    "What is a simple pleasure you have enjoyed recently?",
    "Describe a challenge you overcame and what you learned from it.",
];

/// Candidate words hidden in the word search.
pub const POSITIVE_WORDS: &[&str] = &[
    "CALM", "JOY", "LOVE", "HOPE", "PEACE", "GROW", "SHINE", "SMILE", "HAPPY", "KIND", "BRAVE",
    "DREAM",
];

pub fn random_affirmation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AFFIRMATIONS.choose(rng).copied().unwrap_or(AFFIRMATIONS[0])
}

pub fn random_journal_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOURNAL_PROMPTS.choose(rng).copied().unwrap_or(JOURNAL_PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_picks_come_from_lists() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20 {
            assert!(AFFIRMATIONS.contains(&random_affirmation(&mut rng)));
            assert!(JOURNAL_PROMPTS.contains(&random_journal_prompt(&mut rng)));
        }
    }

    #[test]
    fn test_positive_words_are_uppercase_letters() {
        for word in POSITIVE_WORDS {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{}", word);
        }
    }
}

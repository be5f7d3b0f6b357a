use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Feedback for a single letter.
///
/// Variants are ordered by how much they reveal, so the keyboard status of a
/// letter is the maximum of every status it has received.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Pending,
    Incorrect,
    Present,
    Correct,
}

impl LetterStatus {
    /// Combines two statuses, never downgrading.
    pub fn merge(self, other: LetterStatus) -> LetterStatus {
        self.max(other)
    }
}

/// A submitted letter and its feedback, stored as `["p", "correct"]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessedLetter(pub char, pub LetterStatus);

impl GuessedLetter {
    pub fn letter(&self) -> char {
        self.0
    }

    pub fn status(&self) -> LetterStatus {
        self.1
    }
}

/// Scores `guess` against `target`.
///
/// Exact matches are claimed first, then remaining letters are marked present
/// left to right while unmatched copies of that letter remain in the target.
/// Both words must have the same number of letters.
pub fn score(target: &str, guess: &str) -> Vec<GuessedLetter> {
    let target: Vec<char> = target.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    debug_assert_eq!(target.len(), guess.len(), "guess and target lengths differ");

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &target {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let mut scored: Vec<GuessedLetter> = guess
        .iter()
        .map(|&c| GuessedLetter(c, LetterStatus::Incorrect))
        .collect();

    // Exact pass
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g != t {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g).filter(|count| **count > 0) {
            *count -= 1;
            scored[i].1 = LetterStatus::Correct;
        }
    }

    // Misplaced pass
    for (i, g) in guess.iter().enumerate() {
        if scored[i].1 == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(g).filter(|count| **count > 0) {
            *count -= 1;
            scored[i].1 = LetterStatus::Present;
        }
    }

    scored
}

pub fn is_all_correct(guess: &[GuessedLetter]) -> bool {
    !guess.is_empty() && guess.iter().all(|l| l.1 == LetterStatus::Correct)
}

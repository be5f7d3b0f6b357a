use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt,
};

use crate::{
    error::{Error, Result},
    scoring::{GuessedLetter, LetterStatus},
};

use super::MAX_GUESSES;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndGameStatus {
    Won,
    Lost,
}

impl fmt::Display for EndGameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndGameStatus::Won => "won",
            EndGameStatus::Lost => "lost",
        };
        write!(f, "{}", s)
    }
}

/// Single source of truth for the live game or a past game under review.
///
/// Only the reducer changes a `GameState`; everything else reads it.
/// `word_length` is the row width of the live game. While a past game is
/// shown its target may have a different length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub(crate) target_word: String,
    pub(crate) word_length: usize,
    pub(crate) word_list: VecDeque<String>,
    pub(crate) pending_guess: Vec<char>,
    pub(crate) submitted_guesses: Vec<Vec<GuessedLetter>>,
    pub(crate) letter_keys: BTreeMap<char, LetterStatus>,
    pub(crate) hints: BTreeSet<char>,
    pub(crate) end_game_status: Option<EndGameStatus>,
    pub(crate) show_end_game_modal: bool,
    pub(crate) is_past_game: bool,
}

impl GameState {
    /// A fresh game for `target_word` with `word_list` queued behind it.
    pub fn new(target_word: impl Into<String>, word_list: impl IntoIterator<Item = String>) -> Self {
        let target_word = target_word.into().to_lowercase();
        Self {
            word_length: target_word.chars().count(),
            target_word,
            word_list: word_list.into_iter().map(|w| w.to_lowercase()).collect(),
            ..Self::default()
        }
    }

    /// Plays the first word of `words` and queues the rest.
    pub fn from_word_list(words: Vec<String>) -> Result<Self> {
        let mut words = words.into_iter();
        let target = words.next().ok_or(Error::EmptyWordList)?;
        let state = Self::new(target, words);

        if let Some(word) = state
            .word_list
            .iter()
            .find(|w| w.chars().count() != state.word_length)
        {
            return Err(Error::WordLengthMismatch {
                word: word.clone(),
                expected: state.word_length,
            });
        }

        Ok(state)
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words queued for future games, next first.
    pub fn word_list(&self) -> &VecDeque<String> {
        &self.word_list
    }

    pub fn pending_guess(&self) -> &[char] {
        &self.pending_guess
    }

    pub fn pending_word(&self) -> String {
        self.pending_guess.iter().collect()
    }

    pub fn submitted_guesses(&self) -> &[Vec<GuessedLetter>] {
        &self.submitted_guesses
    }

    pub fn letter_keys(&self) -> &BTreeMap<char, LetterStatus> {
        &self.letter_keys
    }

    /// Keyboard status of `letter`; `Pending` until it has been guessed.
    pub fn key_status(&self, letter: char) -> LetterStatus {
        self.letter_keys
            .get(&letter)
            .copied()
            .unwrap_or(LetterStatus::Pending)
    }

    pub fn hints(&self) -> &BTreeSet<char> {
        &self.hints
    }

    pub fn end_game_status(&self) -> Option<EndGameStatus> {
        self.end_game_status
    }

    pub fn show_end_game_modal(&self) -> bool {
        self.show_end_game_modal
    }

    pub fn is_past_game(&self) -> bool {
        self.is_past_game
    }

    pub fn is_complete(&self) -> bool {
        self.end_game_status.is_some()
    }

    /// True when letters, guesses and hints can no longer change.
    pub fn is_frozen(&self) -> bool {
        self.is_complete() || self.is_past_game
    }

    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.submitted_guesses.len())
    }

    /// Number of tiles per row for the game being shown.
    pub fn display_length(&self) -> usize {
        self.target_word.chars().count()
    }

    /// Whether `Restart` would start a new game rather than be ignored.
    pub fn can_restart(&self, reuse_current_word: bool) -> bool {
        !self.word_list.is_empty() || reuse_current_word
    }

    /// Target letters the player already knows about, from feedback or hints.
    pub fn found_letters(&self) -> BTreeSet<char> {
        self.target_word
            .chars()
            .filter(|c| {
                self.hints.contains(c)
                    || self.key_status(*c) >= LetterStatus::Present
            })
            .collect()
    }
}

//! Persisted win/loss statistics and the recent-games list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    game::{EndGameStatus, GameState, MAX_GUESSES},
    scoring::{GuessedLetter, LetterStatus},
};

/// Maximum number of games kept in [`GameStats::history`].
pub const MAX_HISTORY_SIZE: usize = 10;

/// A frozen, replayable record of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub end_game_status: EndGameStatus,
    pub submitted_guesses: Vec<Vec<GuessedLetter>>,
    pub target_word: String,
    #[serde(default)]
    pub letter_keys: BTreeMap<char, LetterStatus>,
}

impl HistoryEntry {
    /// Snapshot of a finished game. Returns `None` while it is in progress.
    pub fn from_state(state: &GameState, date: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            date,
            end_game_status: state.end_game_status()?,
            submitted_guesses: state.submitted_guesses().to_vec(),
            target_word: state.target_word().to_string(),
            letter_keys: state.letter_keys().clone(),
        })
    }

    pub fn guess_count(&self) -> usize {
        self.submitted_guesses.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub won_count: u32,
    pub lost_count: u32,
    /// Wins keyed by the number of guesses they took.
    pub guess_distribution: BTreeMap<usize, u32>,
    /// Most recent first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            won_count: 0,
            lost_count: 0,
            guess_distribution: (1..=MAX_GUESSES).map(|n| (n, 0)).collect(),
            history: Vec::new(),
        }
    }
}

impl GameStats {
    /// Folds a finished game into the totals. Returns false, changing
    /// nothing, if the game is still in progress.
    pub fn record(&mut self, state: &GameState, date: DateTime<Utc>) -> bool {
        let Some(entry) = HistoryEntry::from_state(state, date) else {
            return false;
        };

        match entry.end_game_status {
            EndGameStatus::Won => {
                self.won_count += 1;
                *self
                    .guess_distribution
                    .entry(entry.guess_count())
                    .or_insert(0) += 1;
            }
            EndGameStatus::Lost => self.lost_count += 1,
        }

        self.history.insert(0, entry);
        self.history.truncate(MAX_HISTORY_SIZE);
        true
    }

    pub fn total_games(&self) -> u32 {
        self.won_count + self.lost_count
    }

    /// Rounded share of games won, 0 when nothing has been played.
    pub fn win_percentage(&self) -> u32 {
        match self.total_games() {
            0 => 0,
            total => ((self.won_count as f64 / total as f64) * 100.0).round() as u32,
        }
    }

    /// Completed games that have aged out of `history`.
    pub fn additional_count(&self) -> u32 {
        self.total_games()
            .saturating_sub(self.history.len() as u32)
    }
}

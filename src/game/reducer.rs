use rand::{Rng, seq::IndexedRandom};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, info, warn};

use crate::{history::HistoryEntry, scoring, wordlist};

use super::{Action, EndGameStatus, GameState, MAX_GUESSES};

/// Applies `action` to `state`.
///
/// Rejected actions hand back the state untouched.
pub fn reduce(state: GameState, action: Action) -> GameState {
    reduce_with_rng(state, action, &mut rand::rng())
}

/// Like [`reduce`], drawing hint letters from the supplied generator.
pub fn reduce_with_rng<R: Rng + ?Sized>(state: GameState, action: Action, rng: &mut R) -> GameState {
    match action {
        Action::AddPendingLetter(letter) => add_pending_letter(state, letter),
        Action::DeletePendingLetter => delete_pending_letter(state),
        Action::SubmitPendingGuess => submit_pending_guess(state),
        Action::DismissModal => dismiss_modal(state),
        Action::GiveHint => give_hint(state, rng),
        Action::Restart { reuse_current_word } => restart(state, reuse_current_word),
        Action::LoadPastGame(entry) => load_past_game(state, entry),
        Action::SaveSettings {
            word_length,
            word_list,
        } => save_settings(state, word_length, word_list),
    }
}

fn add_pending_letter(mut state: GameState, letter: char) -> GameState {
    if state.is_frozen() || state.pending_guess.len() >= state.word_length {
        return state;
    }

    let letter = letter.to_lowercase().next().unwrap_or(letter);
    state.pending_guess.push(letter);
    state
}

fn delete_pending_letter(mut state: GameState) -> GameState {
    if state.is_frozen() {
        return state;
    }

    state.pending_guess.pop();
    state
}

fn submit_pending_guess(mut state: GameState) -> GameState {
    if state.is_frozen() || state.pending_guess.len() != state.word_length {
        return state;
    }

    let word = state.pending_word();
    if !wordlist::is_valid(&word) {
        debug!(%word, "rejected guess that is not a catalog word");
        return state;
    }

    let guess = scoring::score(&state.target_word, &word);
    for letter in &guess {
        state
            .letter_keys
            .entry(letter.letter())
            .and_modify(|status| *status = status.merge(letter.status()))
            .or_insert(letter.status());
    }
    let solved = scoring::is_all_correct(&guess);
    state.submitted_guesses.push(guess);
    state.pending_guess.clear();

    state.end_game_status = if solved {
        Some(EndGameStatus::Won)
    } else if state.submitted_guesses.len() >= MAX_GUESSES {
        Some(EndGameStatus::Lost)
    } else {
        None
    };
    state.show_end_game_modal = state.end_game_status.is_some();

    if let Some(status) = state.end_game_status {
        info!(
            target_word = %state.target_word,
            guesses = state.submitted_guesses.len(),
            "game {}",
            status
        );
    }

    state
}

fn dismiss_modal(mut state: GameState) -> GameState {
    state.show_end_game_modal = false;
    state
}

fn give_hint<R: Rng + ?Sized>(mut state: GameState, rng: &mut R) -> GameState {
    if state.is_frozen() {
        return state;
    }

    let found = state.found_letters();
    let candidates: Vec<char> = state
        .target_word
        .chars()
        .filter(|c| !found.contains(c))
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect();

    match candidates.choose(rng) {
        Some(&letter) => {
            debug!(%letter, "revealed hint");
            state.hints.insert(letter);
        }
        None => debug!("no letters left to hint"),
    }

    state
}

fn restart(mut state: GameState, reuse_current_word: bool) -> GameState {
    if !state.can_restart(reuse_current_word) {
        debug!("word list exhausted, keeping current game");
        return state;
    }

    if reuse_current_word {
        state.word_list.push_back(state.target_word.clone());
    }

    let Some(target_word) = state.word_list.pop_front() else {
        return state;
    };

    info!(remaining = state.word_list.len(), "starting new game");
    // A re-queued past game may have another length than the live setting.
    GameState {
        word_length: target_word.chars().count(),
        target_word,
        word_list: state.word_list,
        ..GameState::default()
    }
}

fn load_past_game(state: GameState, entry: HistoryEntry) -> GameState {
    GameState {
        target_word: entry.target_word,
        word_length: state.word_length,
        word_list: state.word_list,
        submitted_guesses: entry.submitted_guesses,
        letter_keys: entry.letter_keys,
        end_game_status: Some(entry.end_game_status),
        is_past_game: true,
        ..GameState::default()
    }
}

fn save_settings(mut state: GameState, word_length: usize, word_list: Vec<String>) -> GameState {
    if word_length == 0 {
        warn!("ignoring settings without a word length");
        return state;
    }
    if word_list.is_empty() {
        warn!(word_length, "ignoring settings without a word list");
        return state;
    }
    let word_list: Vec<String> = word_list.iter().map(|w| w.to_lowercase()).collect();
    if let Some(word) = word_list.iter().find(|w| w.chars().count() != word_length) {
        warn!(%word, word_length, "ignoring settings with a mismatched word list");
        return state;
    }

    let mut word_list: VecDeque<String> = word_list.into();

    if state.is_past_game {
        state.word_length = word_length;
        state.word_list = word_list;
        return state;
    }

    let Some(target_word) = word_list.pop_front() else {
        return state;
    };

    info!(word_length, "settings changed, starting new game");
    GameState {
        target_word,
        word_length,
        word_list,
        ..GameState::default()
    }
}

//! Bootstraps a game from configuration and wires the reducer to storage.

use rand::Rng;
use tracing::{info, warn};

use crate::{
    config::{self, DEFAULT_WORD_LENGTH, Settings},
    error::{Error, Result},
    game::{self, Action, GameState},
    history::{self, GameStats, StatsTracker},
    storage::KeyValueStore,
    wordlist,
};

/// Startup overrides. Both take precedence over saved settings.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    pub word_length: Option<usize>,
    /// Played in order; the first word is the first target.
    pub word_list: Option<Vec<String>>,
}

pub fn initial_state<S: KeyValueStore + ?Sized>(
    options: &BootstrapOptions,
    store: &S,
) -> Result<GameState> {
    initial_state_with(options, store, &mut rand::rng())
}

pub fn initial_state_with<S, R>(options: &BootstrapOptions, store: &S, rng: &mut R) -> Result<GameState>
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(words) = &options.word_list {
        let state = GameState::from_word_list(words.clone())?;
        if let Some(expected) = options.word_length.filter(|&len| len != state.word_length()) {
            return Err(Error::WordLengthMismatch {
                word: state.target_word().to_string(),
                expected,
            });
        }
        if let Some(word) = words.iter().find(|w| !wordlist::is_valid(&w.to_lowercase())) {
            warn!(%word, "word list contains a word that cannot be guessed");
        }
        return Ok(state);
    }

    let word_length = match options.word_length {
        Some(len) => len,
        None => config::load_settings(store)?
            .map(|s| s.word_length)
            .unwrap_or(DEFAULT_WORD_LENGTH),
    };

    GameState::from_word_list(wordlist::random_order_with(word_length, rng)?)
}

/// A live game bound to a store.
///
/// Every dispatched action is followed by the stats tracker, so finished
/// games are recorded as a side effect of the transition that ends them.
pub struct Session<S: KeyValueStore> {
    state: GameState,
    store: S,
    tracker: StatsTracker,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, options: &BootstrapOptions) -> Result<Self> {
        let state = initial_state(options, &store)?;
        info!(word_length = state.word_length(), "session started");
        Ok(Self::with_state(store, state))
    }

    pub fn with_state(store: S, state: GameState) -> Self {
        Self {
            tracker: StatsTracker::new(&state),
            state,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies `action`, then records the game if it just finished.
    ///
    /// The transition is kept even when recording fails.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        self.state = game::reduce(state, action);
        self.tracker.observe(&self.state, &self.store).map(|_| ())
    }

    /// Saves a new word length and starts over with it.
    ///
    /// The current queue is kept when the length is unchanged.
    pub fn save_settings(&mut self, word_length: usize) -> Result<()> {
        wordlist::words_for(word_length)?;
        config::save_settings(&self.store, &Settings { word_length })?;

        let word_list = if word_length == self.state.word_length() && !self.state.word_list().is_empty() {
            self.state.word_list().iter().cloned().collect()
        } else {
            wordlist::random_order(word_length)?
        };

        self.dispatch(Action::SaveSettings {
            word_length,
            word_list,
        })
    }

    pub fn stats(&self) -> Result<GameStats> {
        history::load_stats(&self.store)
    }

    /// Shows the `index`-th most recent game. Returns false if there is none.
    pub fn load_past_game(&mut self, index: usize) -> Result<bool> {
        let Some(entry) = self.stats()?.history.into_iter().nth(index) else {
            return Ok(false);
        };
        self.dispatch(Action::LoadPastGame(entry))?;
        Ok(true)
    }

    /// Clears persisted data and starts again from defaults.
    pub fn reset(&mut self) -> Result<()> {
        history::clear_session(&self.store);
        self.state = initial_state(&BootstrapOptions::default(), &self.store)?;
        self.tracker = StatsTracker::new(&self.state);
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    error::{Error, Result},
    game::{EndGameStatus, GameState},
    storage::{GAME_STATS_KEY, KeyValueStore, SETTINGS_KEY},
};

use super::GameStats;

/// Reads persisted stats, falling back to the zero value when none exist.
pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> Result<GameStats> {
    match store.get(GAME_STATS_KEY) {
        None => Ok(GameStats::default()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::CorruptData {
            key: GAME_STATS_KEY.to_string(),
            source,
        }),
    }
}

pub fn save_stats<S: KeyValueStore + ?Sized>(store: &S, stats: &GameStats) -> Result<()> {
    let raw = serde_json::to_string(stats).map_err(|source| Error::Encode {
        key: GAME_STATS_KEY.to_string(),
        source,
    })?;
    store.set(GAME_STATS_KEY, &raw);
    Ok(())
}

/// Drops every persisted key so a corrupt session can start clean.
pub fn clear_session<S: KeyValueStore + ?Sized>(store: &S) {
    info!("clearing session data");
    store.remove(GAME_STATS_KEY);
    store.remove(SETTINGS_KEY);
}

/// Records each finished live game exactly once.
///
/// Must see every state the reducer produces; a game is recorded on the
/// observation where its end status differs from the previous one.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    previous: Option<EndGameStatus>,
}

impl StatsTracker {
    pub fn new(initial: &GameState) -> Self {
        Self {
            previous: initial.end_game_status(),
        }
    }

    /// Returns whether `state` was recorded.
    pub fn observe<S: KeyValueStore + ?Sized>(&mut self, state: &GameState, store: &S) -> Result<bool> {
        self.observe_at(state, store, Utc::now())
    }

    pub fn observe_at<S: KeyValueStore + ?Sized>(
        &mut self,
        state: &GameState,
        store: &S,
        date: DateTime<Utc>,
    ) -> Result<bool> {
        let current = state.end_game_status();
        let previous = std::mem::replace(&mut self.previous, current);

        if state.is_past_game() || current.is_none() || current == previous {
            return Ok(false);
        }

        let mut stats = load_stats(store)?;
        stats.record(state, date);
        save_stats(store, &stats)?;

        info!(
            won = stats.won_count,
            lost = stats.lost_count,
            "recorded finished game"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::{Action, reduce},
        storage::MemoryStore,
    };

    fn play(mut state: GameState, word: &str) -> GameState {
        for c in word.chars() {
            state = reduce(state, Action::AddPendingLetter(c));
        }
        reduce(state, Action::SubmitPendingGuess)
    }

    #[test]
    fn test_load_stats_defaults_when_missing() {
        let store = MemoryStore::new();
        assert_eq!(load_stats(&store).unwrap(), GameStats::default());
    }

    #[test]
    fn test_load_stats_reports_corruption() {
        let store = MemoryStore::new();
        store.set(GAME_STATS_KEY, r#"{"history":["bad-data"]}"#);
        assert!(matches!(load_stats(&store), Err(Error::CorruptData { .. })));

        store.set(GAME_STATS_KEY, "not json");
        assert!(matches!(load_stats(&store), Err(Error::CorruptData { .. })));
    }

    #[test]
    fn test_observe_records_once() {
        let store = MemoryStore::new();
        let state = GameState::new("poop", vec!["turd".to_string()]);
        let mut tracker = StatsTracker::new(&state);

        assert!(!tracker.observe(&state, &store).unwrap());

        let won = play(state, "poop");
        assert!(tracker.observe(&won, &store).unwrap());
        assert!(!tracker.observe(&won, &store).unwrap());

        let dismissed = reduce(won, Action::DismissModal);
        assert!(!tracker.observe(&dismissed, &store).unwrap());

        let stats = load_stats(&store).unwrap();
        assert_eq!(stats.won_count, 1);
        assert_eq!(stats.guess_distribution[&1], 1);
        assert_eq!(stats.history.len(), 1);
    }

    #[test]
    fn test_observe_skips_past_games() {
        let store = MemoryStore::new();
        let state = GameState::new("poop", vec!["turd".to_string()]);
        let mut tracker = StatsTracker::new(&state);

        let won = play(state, "poop");
        tracker.observe(&won, &store).unwrap();
        let entry = load_stats(&store).unwrap().history[0].clone();

        let next = reduce(won, Action::Restart { reuse_current_word: false });
        tracker.observe(&next, &store).unwrap();

        let past = reduce(next, Action::LoadPastGame(entry));
        assert!(!tracker.observe(&past, &store).unwrap());
        assert_eq!(load_stats(&store).unwrap().won_count, 1);
    }

    #[test]
    fn test_clear_session_removes_keys() {
        let store = MemoryStore::new();
        store.set(GAME_STATS_KEY, "{}");
        store.set(SETTINGS_KEY, "{}");
        clear_session(&store);
        assert_eq!(store.get(GAME_STATS_KEY), None);
        assert_eq!(store.get(SETTINGS_KEY), None);
    }
}

use turdle::{
    Error,
    config::{self, Settings},
    game::{Action, EndGameStatus, GameState},
    history::{self, MAX_HISTORY_SIZE},
    session::{BootstrapOptions, Session},
    storage::{FileStore, GAME_STATS_KEY, KeyValueStore, MemoryStore, SETTINGS_KEY},
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn guess<S: KeyValueStore>(session: &mut Session<S>, word: &str) {
    for c in word.chars() {
        session.dispatch(Action::AddPendingLetter(c)).unwrap();
    }
    session.dispatch(Action::SubmitPendingGuess).unwrap();
}

fn session_with(store: MemoryStore, list: &[&str]) -> Session<MemoryStore> {
    let options = BootstrapOptions {
        word_length: None,
        word_list: Some(words(list)),
    };
    Session::new(store, &options).unwrap()
}

#[test]
fn plays_through_word_list_until_exhausted() {
    let mut session = session_with(MemoryStore::new(), &["caca", "poop", "turd"]);

    guess(&mut session, "caca");
    assert_eq!(session.state().end_game_status(), Some(EndGameStatus::Won));

    session
        .dispatch(Action::Restart { reuse_current_word: false })
        .unwrap();
    assert_eq!(session.state().target_word(), "poop");
    guess(&mut session, "poop");

    session
        .dispatch(Action::Restart { reuse_current_word: false })
        .unwrap();
    assert_eq!(session.state().target_word(), "turd");
    assert!(!session.state().can_restart(false));

    guess(&mut session, "turd");
    session
        .dispatch(Action::Restart { reuse_current_word: false })
        .unwrap();
    assert_eq!(session.state().target_word(), "turd");
    assert!(session.state().is_complete());

    assert_eq!(session.stats().unwrap().won_count, 3);
}

#[test]
fn finished_game_is_recorded_once() {
    let store = MemoryStore::new();
    let mut session = session_with(store.clone(), &["poop", "turd"]);

    guess(&mut session, "crap");
    guess(&mut session, "poop");
    session.dispatch(Action::DismissModal).unwrap();
    session.dispatch(Action::GiveHint).unwrap();
    session.dispatch(Action::SubmitPendingGuess).unwrap();

    let stats = history::load_stats(&store).unwrap();
    assert_eq!(stats.won_count, 1);
    assert_eq!(stats.lost_count, 0);
    assert_eq!(stats.guess_distribution[&2], 1);
    assert_eq!(stats.history.len(), 1);
    assert_eq!(stats.history[0].target_word, "poop");
}

#[test]
fn lost_game_counts_without_distribution() {
    let mut session = session_with(MemoryStore::new(), &["turd"]);
    for _ in 0..4 {
        guess(&mut session, "scat");
    }

    assert_eq!(session.state().end_game_status(), Some(EndGameStatus::Lost));
    let stats = session.stats().unwrap();
    assert_eq!(stats.lost_count, 1);
    assert!(stats.guess_distribution.values().all(|&n| n == 0));
}

#[test]
fn history_keeps_most_recent_games() {
    let list: Vec<&str> = std::iter::repeat_n("soil", MAX_HISTORY_SIZE + 2).collect();
    let mut session = session_with(MemoryStore::new(), &list);

    for _ in 0..MAX_HISTORY_SIZE + 2 {
        guess(&mut session, "soil");
        session
            .dispatch(Action::Restart { reuse_current_word: false })
            .unwrap();
    }

    let stats = session.stats().unwrap();
    assert_eq!(stats.won_count as usize, MAX_HISTORY_SIZE + 2);
    assert_eq!(stats.history.len(), MAX_HISTORY_SIZE);
    assert_eq!(stats.additional_count(), 2);
    assert!(stats.history.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn viewing_past_game_does_not_record() {
    let mut session = session_with(MemoryStore::new(), &["poop", "turd"]);
    guess(&mut session, "poop");
    session
        .dispatch(Action::Restart { reuse_current_word: false })
        .unwrap();

    assert!(session.load_past_game(0).unwrap());
    assert!(session.state().is_past_game());
    assert_eq!(session.state().target_word(), "poop");
    assert!(!session.load_past_game(5).unwrap());

    session
        .dispatch(Action::Restart { reuse_current_word: false })
        .unwrap();
    session
        .dispatch(Action::Restart { reuse_current_word: false })
        .unwrap();

    let stats = session.stats().unwrap();
    assert_eq!(stats.won_count, 1);
    assert_eq!(stats.history.len(), 1);
}

#[test]
fn corrupt_stats_surface_until_reset() {
    let store = MemoryStore::new();
    store.set(GAME_STATS_KEY, r#"["bad-data"]"#);
    let mut session = session_with(store.clone(), &["dung"]);

    assert!(matches!(session.stats(), Err(Error::CorruptData { .. })));

    for c in "dung".chars() {
        session.dispatch(Action::AddPendingLetter(c)).unwrap();
    }
    assert!(session.dispatch(Action::SubmitPendingGuess).is_err());
    assert_eq!(session.state().end_game_status(), Some(EndGameStatus::Won));

    session.reset().unwrap();
    assert_eq!(store.get(GAME_STATS_KEY), None);
    assert_eq!(session.stats().unwrap().total_games(), 0);
}

#[test]
fn stats_write_notifies_subscribers() {
    let store = MemoryStore::new();
    let events = store.subscribe();
    let mut session = session_with(store, &["shit"]);

    guess(&mut session, "shit");

    let keys: Vec<String> = events.try_iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![GAME_STATS_KEY.to_string()]);
}

#[test]
fn settings_survive_reopening_file_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::new(dir.path());
        let mut session =
            Session::with_state(store, GameState::new("poop", words(&["turd"])));
        session.save_settings(5).unwrap();
        assert_eq!(session.state().word_length(), 5);
        let target = session.state().target_word().to_string();
        guess(&mut session, &target);
    }

    let store = FileStore::new(dir.path());
    assert_eq!(
        config::load_settings(&store).unwrap(),
        Some(Settings { word_length: 5 })
    );
    assert!(store.get(SETTINGS_KEY).is_some());

    let session = Session::new(store, &BootstrapOptions::default()).unwrap();
    assert_eq!(session.state().word_length(), 5);
    assert_eq!(session.stats().unwrap().won_count, 1);
}

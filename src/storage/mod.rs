//! Flat key-value persistence behind a swappable port.
//!
//! Stores never fail loudly: read and write errors are logged and treated as
//! missing data so gameplay is never blocked by storage.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::{
    Mutex, PoisonError,
    mpsc::{self, Receiver, Sender},
};

pub const GAME_STATS_KEY: &str = "turdle:game-stats";
pub const SETTINGS_KEY: &str = "turdle:settings";

/// Emitted after a key is successfully written or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Receives a [`StorageEvent`] for every later change.
    fn subscribe(&self) -> Receiver<StorageEvent>;
}

/// Fan-out of change events to every live subscriber.
#[derive(Debug, Default)]
pub(crate) struct ChangeNotifier {
    subscribers: Mutex<Vec<Sender<StorageEvent>>>,
}

impl ChangeNotifier {
    pub(crate) fn subscribe(&self) -> Receiver<StorageEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    pub(crate) fn notify(&self, key: &str) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| {
            tx.send(StorageEvent {
                key: key.to_string(),
            })
            .is_ok()
        });
    }
}

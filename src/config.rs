use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    error::{Error, Result},
    storage::{KeyValueStore, SETTINGS_KEY},
};

pub const DEFAULT_WORD_LENGTH: usize = 4;

/// Player preferences remembered between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub word_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

/// Reads saved settings. `Ok(None)` means nothing has been saved yet.
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Settings>> {
    store
        .get(SETTINGS_KEY)
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| Error::CorruptData {
                key: SETTINGS_KEY.to_string(),
                source,
            })
        })
        .transpose()
}

pub fn save_settings<S: KeyValueStore + ?Sized>(store: &S, settings: &Settings) -> Result<()> {
    let raw = serde_json::to_string(settings).map_err(|source| Error::Encode {
        key: SETTINGS_KEY.to_string(),
        source,
    })?;
    store.set(SETTINGS_KEY, &raw);
    Ok(())
}

/// Platform data directory for saved games and logs.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("turdle"))
}

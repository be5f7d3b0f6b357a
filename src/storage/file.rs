use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::mpsc::Receiver,
};
use tracing::warn;

use super::{ChangeNotifier, KeyValueStore, StorageEvent};

/// Keeps each key in its own JSON file under a data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    notifier: ChangeNotifier,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            notifier: ChangeNotifier::default(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self.write(key, value) {
            Ok(()) => self.notifier.notify(key),
            Err(e) => warn!(key, error = %e, "failed to store value"),
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => self.notifier.notify(key),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(key, error = %e, "failed to remove stored value"),
        }
    }

    fn subscribe(&self) -> Receiver<StorageEvent> {
        self.notifier.subscribe()
    }
}

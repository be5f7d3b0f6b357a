mod tracker;
mod types;

pub use tracker::{StatsTracker, clear_session, load_stats, save_stats};
pub use types::{GameStats, HistoryEntry, MAX_HISTORY_SIZE};

use crate::history::HistoryEntry;

/// Every transition the UI can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddPendingLetter(char),
    DeletePendingLetter,
    SubmitPendingGuess,
    DismissModal,
    GiveHint,
    /// Start the next queued word. With `reuse_current_word` the word just
    /// played goes to the back of the queue first.
    Restart { reuse_current_word: bool },
    /// Show a finished game from history without touching the live queue.
    LoadPastGame(HistoryEntry),
    SaveSettings {
        word_length: usize,
        word_list: Vec<String>,
    },
}

use crate::{
    game::{GameState, MAX_GUESSES},
    scoring::LetterStatus,
};

const SHARE_URL: &str = "https://turdle.app";

/// Spoiler-free summary of a game for pasting elsewhere.
pub fn summary(state: &GameState) -> String {
    let rows: Vec<String> = state
        .submitted_guesses()
        .iter()
        .map(|guess| guess.iter().map(|l| tile(l.status())).collect())
        .collect();

    format!(
        "{SHARE_URL} ({}/{MAX_GUESSES})\n\n{}",
        state.submitted_guesses().len(),
        rows.join("\n")
    )
}

fn tile(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Incorrect => '⬛',
        LetterStatus::Pending => '⬜',
    }
}

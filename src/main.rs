use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use turdle::{
    Error,
    args::Args,
    config,
    game::{Action, EndGameStatus, GameState},
    history,
    logging,
    scoring::LetterStatus,
    session::{BootstrapOptions, Session},
    share,
    storage::{FileStore, KeyValueStore, MemoryStore},
    wordlist::{self, Difficulty},
};

fn main() -> Result<()> {
    let args = Args::parse();

    let data_dir = if args.ephemeral {
        None
    } else {
        Some(
            args.data_dir
                .clone()
                .or_else(config::data_dir)
                .context("Unable to determine data directory for your platform")?,
        )
    };

    let _guard = logging::init(data_dir.as_deref()).context("failed to set up logging")?;

    match data_dir {
        Some(dir) => run(FileStore::new(dir), &args),
        None => run(MemoryStore::new(), &args),
    }
}

fn run<S: KeyValueStore>(store: S, args: &Args) -> Result<()> {
    if args.reset {
        history::clear_session(&store);
    }

    let options = BootstrapOptions {
        word_length: args.length,
        word_list: args.words.clone(),
    };
    let mut session = Session::new(store, &options).context("failed to start game")?;

    print_help();
    print_state(session.state());
    interactive_loop(&mut session)
}

fn interactive_loop<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    let stdin = io::stdin();

    loop {
        print!("turdle> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        let mut parts = line.split_whitespace();
        let result = match parts.next() {
            None | Some(":enter") => submit(session),
            Some(":quit") | Some(":q") => break,
            Some(":help") => {
                print_help();
                Ok(())
            }
            Some(":del") => session.dispatch(Action::DeletePendingLetter),
            Some(":hint") => session.dispatch(Action::GiveHint),
            Some(":new") => restart(session, false),
            Some(":retry") => restart(session, true),
            Some(":close") => session.dispatch(Action::DismissModal),
            Some(":share") => {
                println!("{}", share::summary(session.state()));
                continue;
            }
            Some(":stats") => session.stats().map(|stats| print_stats(&stats)),
            Some(":history") => session.stats().map(|stats| print_history(&stats)),
            Some(":load") => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(index) => session.load_past_game(index).map(|found| {
                    if !found {
                        println!("no game #{index} in history");
                    }
                }),
                None => {
                    eprintln!("expected: :load N");
                    continue;
                }
            },
            Some(":length") => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(len) => session.save_settings(len),
                None => {
                    print_difficulties(session.state().word_length());
                    continue;
                }
            },
            Some(":reset") => session.reset(),
            Some(cmd) if cmd.starts_with(':') => {
                eprintln!("unknown command {cmd} (try :help)");
                continue;
            }
            Some(_) => type_letters(session, line),
        };

        if let Err(e) = result {
            report(&e);
        }
        print_state(session.state());
    }

    Ok(())
}

/// Types every letter in `input`, submitting once a full word is pending.
fn type_letters<S: KeyValueStore>(session: &mut Session<S>, input: &str) -> turdle::Result<()> {
    for c in input.chars().filter(|c| c.is_alphabetic()) {
        session.dispatch(Action::AddPendingLetter(c))?;
    }

    let state = session.state();
    if !state.is_frozen() && state.pending_guess().len() == state.word_length() {
        submit(session)?;
    }
    Ok(())
}

fn submit<S: KeyValueStore>(session: &mut Session<S>) -> turdle::Result<()> {
    let before = session.state().submitted_guesses().len();
    session.dispatch(Action::SubmitPendingGuess)?;

    let state = session.state();
    if state.submitted_guesses().len() == before
        && !state.is_frozen()
        && state.pending_guess().len() == state.word_length()
        && !wordlist::is_valid(&state.pending_word())
    {
        println!("\"{}\" is not a valid word", state.pending_word());
        while !session.state().pending_guess().is_empty() {
            session.dispatch(Action::DeletePendingLetter)?;
        }
    }
    Ok(())
}

fn restart<S: KeyValueStore>(session: &mut Session<S>, reuse_current_word: bool) -> turdle::Result<()> {
    if !session.state().can_restart(reuse_current_word) {
        println!("No more words! Change the word length to keep playing.");
        return Ok(());
    }
    session.dispatch(Action::Restart { reuse_current_word })
}

fn report(error: &Error) {
    match error {
        Error::CorruptData { .. } => {
            eprintln!("error: {error}");
            eprintln!("This sometimes indicates a corrupt session. Type :reset to delete session data.");
        }
        _ => eprintln!("error: {error}"),
    }
}

fn print_help() {
    println!("Type a word and press enter to guess it.");
    println!("Commands: :del :hint :new :retry :close :share :stats :history :load N :length [N] :reset :quit");
}

fn print_state(state: &GameState) {
    println!();
    if state.is_past_game() {
        println!("(viewing a past game)");
    }

    for guess in state.submitted_guesses() {
        let row: Vec<String> = guess
            .iter()
            .map(|l| match l.status() {
                LetterStatus::Correct => format!("[{}]", l.letter().to_ascii_uppercase()),
                LetterStatus::Present => format!("({})", l.letter()),
                _ => format!(" {} ", l.letter()),
            })
            .collect();
        println!("  {}", row.join(""));
    }

    if !state.is_frozen() {
        let pending: String = (0..state.display_length())
            .map(|i| state.pending_guess().get(i).copied().unwrap_or('_'))
            .collect();
        println!("  {pending}    {} guesses left", state.remaining_guesses());
        print_keyboard(state);
    }

    if !state.hints().is_empty() {
        let hints: String = state.hints().iter().collect();
        println!("  hints: {hints}");
    }

    if state.show_end_game_modal() {
        match state.end_game_status() {
            Some(EndGameStatus::Won) => println!("Congratulations! You won!"),
            Some(EndGameStatus::Lost) => {
                println!("Better luck next time! The word was \"{}\".", state.target_word())
            }
            None => {}
        }
        println!(":new for the next word, :retry to replay this one later, :share to copy results");
    }
}

fn print_keyboard(state: &GameState) {
    for row in ["qwertyuiop", "asdfghjkl", "zxcvbnm"] {
        let keys: Vec<String> = row
            .chars()
            .map(|c| match state.key_status(c) {
                LetterStatus::Correct => c.to_ascii_uppercase().to_string(),
                LetterStatus::Present => format!("{c}?"),
                LetterStatus::Incorrect => "·".to_string(),
                LetterStatus::Pending => c.to_string(),
            })
            .collect();
        println!("    {}", keys.join(" "));
    }
}

fn print_stats(stats: &history::GameStats) {
    println!(
        "played {}  won {}  lost {}  win% {}",
        stats.total_games(),
        stats.won_count,
        stats.lost_count,
        stats.win_percentage()
    );
    for (guesses, count) in &stats.guess_distribution {
        println!("  {guesses}: {}", "#".repeat(*count as usize));
    }
}

fn print_history(stats: &history::GameStats) {
    if stats.history.is_empty() {
        println!("no games played yet");
        return;
    }
    for (i, entry) in stats.history.iter().enumerate() {
        println!(
            "  #{i} {:<8} {:<4} {}/{}  {}",
            entry.target_word,
            entry.end_game_status.to_string(),
            entry.guess_count(),
            turdle::game::MAX_GUESSES,
            entry.date.format("%b %-d %H:%M")
        );
    }
    let additional = stats.additional_count();
    if additional > 0 {
        println!("  and {additional} additional games.");
    }
}

fn print_difficulties(current: usize) {
    for d in Difficulty::ALL {
        let marker = if d.word_length() == current { "*" } else { " " };
        println!(" {marker} {d}");
    }
    println!("usage: :length N");
}

pub mod args;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod logging;
pub mod scoring;
pub mod session;
pub mod share;
pub mod storage;
pub mod wordlist;

pub use error::{Error, Result};

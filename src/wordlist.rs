use once_cell::sync::Lazy;
use rand::{Rng, seq::SliceRandom};
use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use crate::error::{Error, Result};

pub const SUPPORTED_WORD_LENGTHS: [usize; 4] = [3, 4, 5, 6];

const THREE_LETTER_WORDS: &[&str] = &[
    "bog", "can", "gas", "goo", "loo", "mud", "pee", "poo", "pot", "wee",
];

const FOUR_LETTER_WORDS: &[&str] = &[
    "caca", "crap", "dirt", "dung", "poop", "scat", "shat", "shit", "soil", "turd",
];

const FIVE_LETTER_WORDS: &[&str] = &[
    "bowel", "dooky", "feces", "filth", "grime", "plops", "poops", "privy", "sewer", "stool",
    "turds",
];

const SIX_LETTER_WORDS: &[&str] = &[
    "bowels", "doodoo", "dookie", "litter", "manure", "sewage", "sludge", "stinky", "toilet",
];

static CATALOGS: Lazy<HashMap<usize, HashSet<&'static str>>> = Lazy::new(|| {
    SUPPORTED_WORD_LENGTHS
        .iter()
        .filter_map(|&len| {
            catalog_slice(len)
                .ok()
                .map(|words| (len, words.iter().copied().collect()))
        })
        .collect()
});

fn catalog_slice(len: usize) -> Result<&'static [&'static str]> {
    match len {
        3 => Ok(THREE_LETTER_WORDS),
        4 => Ok(FOUR_LETTER_WORDS),
        5 => Ok(FIVE_LETTER_WORDS),
        6 => Ok(SIX_LETTER_WORDS),
        _ => Err(Error::InvalidLength(len)),
    }
}

/// Returns the set of valid words of the given length.
pub fn words_for(len: usize) -> Result<&'static HashSet<&'static str>> {
    CATALOGS.get(&len).ok_or(Error::InvalidLength(len))
}

/// Returns every catalog word of the given length in random order.
pub fn random_order(len: usize) -> Result<Vec<String>> {
    random_order_with(len, &mut rand::rng())
}

/// Like [`random_order`], drawing from the supplied generator.
pub fn random_order_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Vec<String>> {
    let mut words: Vec<String> = catalog_slice(len)?
        .iter()
        .map(|w| w.to_string())
        .collect();

    // Fisher-Yates
    words.shuffle(rng);
    Ok(words)
}

pub fn is_valid(word: &str) -> bool {
    words_for(word.chars().count())
        .map(|words| words.contains(word))
        .unwrap_or(false)
}

/// Named difficulty levels, one per supported word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Master,
    ];

    pub fn word_length(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 4,
            Difficulty::Hard => 5,
            Difficulty::Master => 6,
        }
    }

    pub fn from_word_length(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.word_length() == len)
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Master => "Master",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} letters)", self.label(), self.word_length())
    }
}

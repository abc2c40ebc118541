//! Pairwise word similarity over camel-case sub-words.

use crate::core::lexicon::Lexicon;
use crate::core::segment::split_camel_case;
use thiserror::Error;

/// Two tokens read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub left: String,
    pub right: String,
}

/// Why a line is not a word pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairParseError {
    #[error("expected two whitespace-separated words, found {0}")]
    Missing(usize),

    #[error("expected two whitespace-separated words, found {0}")]
    TooMany(usize),
}

impl WordPair {
    pub fn new<A: Into<String>, B: Into<String>>(left: A, right: B) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Parses a line holding exactly two whitespace-separated tokens.
    pub fn parse(line: &str) -> Result<Self, PairParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [left, right] => Ok(Self::new(*left, *right)),
            short if short.len() < 2 => Err(PairParseError::Missing(short.len())),
            long => Err(PairParseError::TooMany(long.len())),
        }
    }
}

/// Best similarity found for one word pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub pair: WordPair,
    /// `None` when no sense combination was comparable
    pub best: Option<f64>,
}

impl PairScore {
    /// The score, or `sentinel` when nothing was comparable.
    pub fn value_or(&self, sentinel: f64) -> f64 {
        self.best.unwrap_or(sentinel)
    }
}

/// Maximum sense similarity across every sub-word and sense combination of
/// the two tokens.
///
/// Sub-words without senses contribute nothing. Returns `None` when no
/// combination yields a score, which is distinct from a real score of zero.
pub fn max_similarity<L: Lexicon + ?Sized>(lexicon: &L, left: &str, right: &str) -> Option<f64> {
    let right_senses: Vec<_> = split_camel_case(right)
        .iter()
        .map(|word| lexicon.senses_of(word))
        .collect();

    let mut best: Option<f64> = None;
    for word in split_camel_case(left) {
        let left_senses = lexicon.senses_of(&word);
        if left_senses.is_empty() {
            continue;
        }

        for senses in &right_senses {
            for a in &left_senses {
                for b in senses {
                    if let Some(score) = lexicon.similarity(a, b) {
                        best = Some(best.map_or(score, |current| current.max(score)));
                    }
                }
            }
        }
    }

    best
}

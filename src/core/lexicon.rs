//! Narrow interface over a semantic lexicon.

use std::fmt;
use thiserror::Error;

/// Identifier of one dictionary sense, e.g. `cat.n.01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SenseId(String);

impl SenseId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SenseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A source of word senses and pairwise sense similarity.
pub trait Lexicon {
    /// Senses of a word; empty when the word is unknown.
    fn senses_of(&self, word: &str) -> Vec<SenseId>;

    /// Similarity of two senses in `[0, 1]`, or `None` when the senses are
    /// not comparable.
    fn similarity(&self, a: &SenseId, b: &SenseId) -> Option<f64>;
}

impl<T: Lexicon + ?Sized> Lexicon for &T {
    fn senses_of(&self, word: &str) -> Vec<SenseId> {
        (**self).senses_of(word)
    }

    fn similarity(&self, a: &SenseId, b: &SenseId) -> Option<f64> {
        (**self).similarity(a, b)
    }
}

impl<T: Lexicon + ?Sized> Lexicon for Box<T> {
    fn senses_of(&self, word: &str) -> Vec<SenseId> {
        (**self).senses_of(word)
    }

    fn similarity(&self, a: &SenseId, b: &SenseId) -> Option<f64> {
        (**self).similarity(a, b)
    }
}

/// Failures while loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed lexicon row: {0}")]
    Row(#[from] csv::Error),

    #[error("sense `{0}` has no lemmas")]
    NoLemmas(String),

    #[error("sense `{0}` is defined more than once")]
    DuplicateSense(String),

    #[error("sense `{sense}` names unknown hypernym `{hypernym}`")]
    UnknownHypernym { sense: String, hypernym: String },

    #[error("hypernym cycle through sense `{0}`")]
    Cycle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Lexicon for Fixed {
        fn senses_of(&self, word: &str) -> Vec<SenseId> {
            vec![SenseId::new(format!("{word}.n.01"))]
        }

        fn similarity(&self, a: &SenseId, b: &SenseId) -> Option<f64> {
            (a == b).then_some(1.0)
        }
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let boxed: Box<dyn Lexicon> = Box::new(Fixed);
        let borrowed = &Fixed;

        assert_eq!(boxed.senses_of("cat"), vec![SenseId::from("cat.n.01")]);
        assert_eq!(
            borrowed.similarity(&"a".into(), &"a".into()),
            Some(1.0)
        );
        assert_eq!(boxed.similarity(&"a".into(), &"b".into()), None);
    }

    #[test]
    fn test_sense_display() {
        assert_eq!(SenseId::new("dog.n.01").to_string(), "dog.n.01");
    }
}

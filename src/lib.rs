//! Rust implementation of two small developer utilities: a source line
//! counter and a lexical-semantic word similarity scorer.

pub mod cli;
pub mod core;

// Re-export main types
pub use crate::core::{
    LineCountConfig, LineCountConfigBuilder, LineCountReport, MissingScore, PairScore,
    ScorerBuilder, ScorerConfig, SimilarityScorer, TaxonomyLexicon, WordPair,
};

// Re-export modules for convenience
pub use crate::core::lexicon;
pub use crate::core::linecount;
pub use crate::core::score as similarity;
pub use crate::core::segment;

/// Convenient alias for a result with a boxed error.
pub type Result<T> = anyhow::Result<T>;

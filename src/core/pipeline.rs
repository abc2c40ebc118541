//! Line-by-line similarity scoring over a reader and a writer.

use crate::core::lexicon::Lexicon;
use crate::core::score::{max_similarity, PairScore, WordPair};
use crate::Result;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// What to print for a pair with no comparable senses.
#[derive(Debug, Clone, PartialEq)]
pub enum MissingScore {
    /// Print a number, indistinguishable from a real score of that value
    Sentinel(f64),
    /// Print a fixed marker such as `NA`
    Marker(String),
}

impl Default for MissingScore {
    fn default() -> Self {
        MissingScore::Sentinel(0.0)
    }
}

/// Configuration for SimilarityScorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScorerConfig {
    /// Output for pairs without a score
    pub missing: MissingScore,
}

/// Renders one output line (without the newline).
///
/// Found scores always carry a fractional part (`1.0`, `0.75`); a numeric
/// sentinel prints in its shortest form (`0`).
pub fn format_score(score: &PairScore, missing: &MissingScore) -> String {
    match (score.best, missing) {
        (Some(value), _) => format!("{value:?}"),
        (None, MissingScore::Sentinel(value)) => value.to_string(),
        (None, MissingScore::Marker(marker)) => marker.clone(),
    }
}

/// Scores word pairs against a lexicon.
pub struct SimilarityScorer<L> {
    lexicon: L,
    config: ScorerConfig,
}

impl<L: Lexicon> SimilarityScorer<L> {
    /// Creates a new scorer.
    pub fn new(lexicon: L, config: ScorerConfig) -> Self {
        Self { lexicon, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Scores one pair.
    pub fn score_pair(&self, pair: &WordPair) -> PairScore {
        let best = max_similarity(&self.lexicon, &pair.left, &pair.right);
        debug!(left = %pair.left, right = %pair.right, ?best, "scored pair");
        PairScore {
            pair: pair.clone(),
            best,
        }
    }

    /// Parses and scores one input line.
    pub fn score_line(&self, line: &str) -> Result<PairScore> {
        let pair = WordPair::parse(line)?;
        Ok(self.score_pair(&pair))
    }

    /// Scores every line of `input`, writing one result line per input line.
    ///
    /// Each result is flushed before the next line is read. A malformed line
    /// stops the run. Returns the number of lines scored.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<usize> {
        let mut scored = 0;

        for (idx, line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(|| format!("failed to read input line {line_no}"))?;
            let score = self
                .score_line(&line)
                .with_context(|| format!("line {line_no}: {line:?}"))?;

            writeln!(output, "{}", format_score(&score, &self.config.missing))?;
            output.flush()?;
            scored += 1;
        }

        info!(lines = scored, "similarity scoring finished");
        Ok(scored)
    }
}

/// Builder for creating SimilarityScorer with custom configuration.
pub struct ScorerBuilder {
    pub config: ScorerConfig,
}

impl ScorerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::default(),
        }
    }

    /// Prints `value` for pairs without a score.
    pub fn sentinel(mut self, value: f64) -> Self {
        self.config.missing = MissingScore::Sentinel(value);
        self
    }

    /// Prints `marker` for pairs without a score.
    pub fn missing_marker(mut self, marker: &str) -> Self {
        self.config.missing = MissingScore::Marker(marker.to_string());
        self
    }

    /// Builds the scorer around `lexicon`.
    pub fn build<L: Lexicon>(self, lexicon: L) -> SimilarityScorer<L> {
        SimilarityScorer::new(lexicon, self.config)
    }
}

impl Default for ScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

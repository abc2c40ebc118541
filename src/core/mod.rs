pub mod lemma;
pub mod lexicon;
pub mod linecount;
mod pipeline;
pub mod score;
pub mod segment;
mod taxonomy;

pub use lexicon::{Lexicon, LexiconError, SenseId};
pub use linecount::{count_lines, FileRecord, LineCountConfig, LineCountConfigBuilder, LineCountReport};
pub use pipeline::{format_score, MissingScore, ScorerBuilder, ScorerConfig, SimilarityScorer};
pub use score::{max_similarity, PairParseError, PairScore, WordPair};
pub use segment::split_camel_case;
pub use taxonomy::TaxonomyLexicon;

//! Command-line interface for rust-lexsim.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexsim", version, about = "Line counting and word similarity tools")]
pub struct Cli {
    /// Log debug output to stderr (overridden by LEXSIM_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct LinesArgs {
    /// Skip files whose path contains any of these substrings
    /// ("test" and "Test" are always skipped)
    pub excludes: Vec<String>,

    /// File extension to count
    #[arg(long, default_value = "java")]
    pub ext: String,

    /// Directory to traverse
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Args)]
pub struct SimilarityArgs {
    /// Lexicon TSV file (sense, lemmas, hypernyms)
    #[arg(short, long, env = "LEXSIM_LEXICON")]
    pub lexicon: PathBuf,

    /// Number printed when a pair has no comparable senses
    #[arg(long, allow_negative_numbers = true, conflicts_with = "missing_marker")]
    pub sentinel: Option<f64>,

    /// Print this instead of 0 when a pair has no comparable senses
    #[arg(long)]
    pub missing_marker: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count lines of source files below a directory
    Lines(LinesArgs),

    /// Score word pairs read from stdin
    Similarity(SimilarityArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lines_defaults() {
        let cli = Cli::try_parse_from(["lexsim", "lines", "gen", "vendor"]).unwrap();
        match cli.command {
            Command::Lines(args) => {
                assert_eq!(args.excludes, vec!["gen", "vendor"]);
                assert_eq!(args.ext, "java");
                assert_eq!(args.root, PathBuf::from("."));
            }
            Command::Similarity(_) => panic!("expected lines"),
        }
    }

    #[test]
    fn test_similarity_args() {
        let cli = Cli::try_parse_from([
            "lexsim",
            "similarity",
            "--lexicon",
            "words.tsv",
            "--missing-marker",
            "NA",
        ])
        .unwrap();
        match cli.command {
            Command::Similarity(args) => {
                assert_eq!(args.lexicon, PathBuf::from("words.tsv"));
                assert_eq!(args.missing_marker.as_deref(), Some("NA"));
            }
            Command::Lines(_) => panic!("expected similarity"),
        }
    }

    #[test]
    fn test_similarity_sentinel() {
        let cli = Cli::try_parse_from([
            "lexsim",
            "similarity",
            "--lexicon",
            "words.tsv",
            "--sentinel",
            "-1",
        ])
        .unwrap();
        match cli.command {
            Command::Similarity(args) => {
                assert_eq!(args.sentinel, Some(-1.0));
                assert_eq!(args.missing_marker, None);
            }
            Command::Lines(_) => panic!("expected similarity"),
        }

        let both = Cli::try_parse_from([
            "lexsim",
            "similarity",
            "--lexicon",
            "words.tsv",
            "--sentinel",
            "-1",
            "--missing-marker",
            "NA",
        ]);
        assert!(both.is_err());
    }
}

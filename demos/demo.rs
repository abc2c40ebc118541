//! Demo of rust-lexsim functionality.

use rust_lexsim::lexicon::Lexicon;
use rust_lexsim::linecount::count_lines;
use rust_lexsim::segment::split_camel_case;
use rust_lexsim::{LineCountConfigBuilder, ScorerBuilder, TaxonomyLexicon, WordPair};

const SAMPLE_LEXICON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_lexicon.tsv");

fn main() -> anyhow::Result<()> {
    println!("=== rust-lexsim Demo ===\n");

    demo_line_count()?;
    demo_segmentation();
    demo_similarity()?;

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn demo_line_count() -> anyhow::Result<()> {
    println!("1. Line Counting (Rust sources of this crate)");
    println!("------------------------------------");

    let config = LineCountConfigBuilder::new()
        .root(concat!(env!("CARGO_MANIFEST_DIR"), "/src"))
        .extension("rs")
        .build();
    let report = count_lines(&config)?;
    report.render(&mut std::io::stdout())?;
    println!();
    Ok(())
}

fn demo_segmentation() {
    println!("2. Camel-case Segmentation");
    println!("------------------------------------");

    for token in ["fooBarBaz", "cat", "fileName", "HTTPServer"] {
        println!("{token:>12} -> {:?}", split_camel_case(token));
    }
    println!();
}

fn demo_similarity() -> anyhow::Result<()> {
    println!("3. Word Pair Similarity");
    println!("------------------------------------");

    let lexicon = TaxonomyLexicon::from_path(SAMPLE_LEXICON)?;
    println!("Loaded {} senses", lexicon.len());
    println!("Senses of \"cat\": {:?}", lexicon.senses_of("cat"));

    let scorer = ScorerBuilder::new().missing_marker("none").build(&lexicon);
    for (left, right) in [
        ("cat", "cat"),
        ("cat", "dog"),
        ("cats", "boxes"),
        ("fileName", "path"),
        ("cat", "unicorn"),
    ] {
        let score = scorer.score_pair(&WordPair::new(left, right));
        match score.best {
            Some(value) => println!("{left:>10} {right:<10} {value:.4}"),
            None => println!("{left:>10} {right:<10} none"),
        }
    }
    Ok(())
}

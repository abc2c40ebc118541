use anyhow::{Context, Result};
use std::io;

use crate::cli::SimilarityArgs;
use crate::core::{ScorerBuilder, TaxonomyLexicon};

/// Reads word pairs from stdin and prints the best similarity of each pair.
pub fn cmd_similarity(args: SimilarityArgs) -> Result<()> {
    let lexicon = TaxonomyLexicon::from_path(&args.lexicon)
        .with_context(|| format!("failed to load lexicon {}", args.lexicon.display()))?;

    let mut builder = ScorerBuilder::new();
    if let Some(value) = args.sentinel {
        builder = builder.sentinel(value);
    }
    if let Some(marker) = &args.missing_marker {
        builder = builder.missing_marker(marker);
    }
    let scorer = builder.build(lexicon);

    let stdin = io::stdin();
    let stdout = io::stdout();
    scorer.run(stdin.lock(), stdout.lock())?;

    Ok(())
}

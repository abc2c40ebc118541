//! File-backed taxonomic lexicon with Wu-Palmer sense similarity.

use crate::core::lemma::base_forms;
use crate::core::lexicon::{Lexicon, LexiconError, SenseId};
use petgraph::algo::{dijkstra, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One row of the lexicon file.
/// Expected format: sense<tab>lemmas<tab>hypernyms, lists comma-separated.
#[derive(Debug, Deserialize)]
struct LexiconRow {
    sense: String,
    lemmas: String,
    #[serde(default)]
    hypernyms: String,
}

/// A lexicon whose senses form a hypernym hierarchy.
///
/// Edges point from a sense to each of its hypernyms.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyLexicon {
    graph: DiGraph<SenseId, ()>,
    /// Longest hypernym path to a root, counting both ends (roots are 1)
    depths: Vec<usize>,
    by_id: HashMap<SenseId, NodeIndex>,
    by_lemma: HashMap<String, Vec<NodeIndex>>,
}

impl TaxonomyLexicon {
    /// Loads a lexicon from a TSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let lexicon = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), senses = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Parses a lexicon from TSV text with a `sense lemmas hypernyms` header.
    /// Lines starting with `#` are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut tsv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for row in tsv.deserialize() {
            let row: LexiconRow = row?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    fn from_rows(rows: Vec<LexiconRow>) -> Result<Self, LexiconError> {
        let mut graph = DiGraph::with_capacity(rows.len(), rows.len());
        let mut by_id = HashMap::with_capacity(rows.len());
        let mut by_lemma: HashMap<String, Vec<NodeIndex>> = HashMap::new();

        for row in &rows {
            let id = SenseId::new(row.sense.as_str());
            if by_id.contains_key(&id) {
                return Err(LexiconError::DuplicateSense(row.sense.clone()));
            }
            let node = graph.add_node(id.clone());
            by_id.insert(id, node);

            let mut has_lemma = false;
            for lemma in split_list(&row.lemmas) {
                has_lemma = true;
                let entry = by_lemma.entry(lemma.to_lowercase()).or_default();
                if !entry.contains(&node) {
                    entry.push(node);
                }
            }
            if !has_lemma {
                return Err(LexiconError::NoLemmas(row.sense.clone()));
            }
        }

        for row in &rows {
            let node = by_id[&SenseId::new(row.sense.as_str())];
            for name in split_list(&row.hypernyms) {
                let parent = by_id.get(&SenseId::new(name)).copied().ok_or_else(|| {
                    LexiconError::UnknownHypernym {
                        sense: row.sense.clone(),
                        hypernym: name.to_string(),
                    }
                })?;
                graph.update_edge(node, parent, ());
            }
        }

        let depths = compute_depths(&graph)?;

        Ok(Self {
            graph,
            depths,
            by_id,
            by_lemma,
        })
    }

    /// Number of senses.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Depth of a sense in the hierarchy (roots are 1).
    pub fn depth(&self, sense: &SenseId) -> Option<usize> {
        self.by_id.get(sense).map(|node| self.depths[node.index()])
    }

    /// Senses of the word itself, then of each of its base forms.
    fn lookup(&self, word: &str) -> Vec<NodeIndex> {
        let mut found: Vec<NodeIndex> = Vec::new();
        let forms = std::iter::once(word.to_string()).chain(base_forms(word));

        for form in forms {
            if let Some(senses) = self.by_lemma.get(&form) {
                for node in senses {
                    if !found.contains(node) {
                        found.push(*node);
                    }
                }
            }
        }
        found
    }
}

impl Lexicon for TaxonomyLexicon {
    fn senses_of(&self, word: &str) -> Vec<SenseId> {
        let senses: Vec<SenseId> = self
            .lookup(&word.to_lowercase())
            .into_iter()
            .map(|node| self.graph[node].clone())
            .collect();
        debug!(word, senses = senses.len(), "sense lookup");
        senses
    }

    /// Wu-Palmer similarity: `2 * depth(lcs) / (dist(a, lcs) + dist(b, lcs) + 2 * depth(lcs))`.
    fn similarity(&self, a: &SenseId, b: &SenseId) -> Option<f64> {
        let &a = self.by_id.get(a)?;
        let &b = self.by_id.get(b)?;

        // Shortest hypernym distance to every ancestor, the sense itself at 0
        let from_a = dijkstra(&self.graph, a, None, |_| 1usize);
        let from_b = dijkstra(&self.graph, b, None, |_| 1usize);

        // Deepest common ancestor, then the one closest to both senses
        let (depth, path_len) = from_a
            .iter()
            .filter_map(|(node, da)| from_b.get(node).map(|db| (self.depths[node.index()], da + db)))
            .max_by(|x, y| x.0.cmp(&y.0).then(y.1.cmp(&x.1)))?;

        let depth = depth as f64;
        Some(2.0 * depth / (path_len as f64 + 2.0 * depth))
    }
}

fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Longest-path depth of every sense, failing on hypernym cycles.
///
/// Reversed topological order visits every hypernym before its hyponyms.
fn compute_depths(graph: &DiGraph<SenseId, ()>) -> Result<Vec<usize>, LexiconError> {
    let order = toposort(graph, None)
        .map_err(|cycle| LexiconError::Cycle(graph[cycle.node_id()].to_string()))?;

    let mut depths = vec![0; graph.node_count()];
    for node in order.into_iter().rev() {
        depths[node.index()] = 1 + graph
            .neighbors(node)
            .map(|parent| depths[parent.index()])
            .max()
            .unwrap_or(0);
    }

    Ok(depths)
}

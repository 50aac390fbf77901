//! Co-citation network construction

use super::base::{build_base_network, BuildOptions, BuildResult};
use super::prune::top_edges;
use crate::doc::DocumentSet;
use crate::graph::Network;
use rustc_hash::FxHashMap;
use tracing::info;

/// Build a co-citation network: an undirected graph where each node
/// corresponds to a document and edge weights store co-citation strength,
/// the number of documents that cite both endpoints.
///
/// A document's reference list is de-duplicated before pairing, so one
/// citing document contributes at most 1 to any pair. Only the
/// `max_edges` strongest edges are kept (default: twice the document
/// count); co-citation networks are dense and the strongest edges are
/// usually the interesting ones.
pub fn build_cocitation_network(
    docs: &DocumentSet,
    max_edges: Option<usize>,
    options: &BuildOptions,
) -> BuildResult<Network> {
    let max_edges = max_edges.unwrap_or(docs.len() * 2);
    let (mut network, mapping) = build_base_network(docs, false, options)?;

    let mut strength: FxHashMap<(usize, usize), u64> = FxHashMap::default();

    for doc in docs {
        let mut refs: Vec<usize> = doc
            .references
            .iter()
            .flatten()
            .filter_map(|reference| mapping.get(reference))
            .collect();
        refs.sort_unstable();
        refs.dedup();

        // refs is sorted and unique, so (i, j) pairs are canonical
        for (a, &i) in refs.iter().enumerate() {
            for &j in &refs[a + 1..] {
                *strength.entry((i, j)).or_insert(0) += 1;
            }
        }
    }

    for ((i, j), weight) in top_edges(strength, max_edges) {
        network.add_weighted_edge(i, j, weight);
    }

    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        max_edges,
        "built co-citation network"
    );
    Ok(network)
}

//! Bibliographic coupling network construction

use super::base::{build_base_network, BuildOptions, BuildResult};
use super::prune::top_edges;
use crate::doc::DocumentSet;
use crate::graph::Network;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

/// Build a bibliographic coupling network: an undirected graph where nodes
/// are documents and edge weights count shared references, a measure of
/// how similarly two documents view related work.
///
/// Unlike co-citation, the reference universe is not restricted to the
/// document set: a reference id outside the set gets a fresh virtual index
/// in the identity mapping so that two documents citing the same external
/// work still couple. Virtual indices live only in the mapping; they never
/// become network nodes.
///
/// The coupling strength is duplicated under both `weight` and `score`.
/// Only the `max_edges` strongest edges are kept (default 1000).
pub fn build_coupling_network(
    docs: &DocumentSet,
    max_edges: Option<usize>,
    options: &BuildOptions,
) -> BuildResult<Network> {
    let max_edges = max_edges.unwrap_or(1000);
    let (mut network, mut mapping) = build_base_network(docs, false, options)?;

    let mut next_index = docs.len();
    let mut doc_refs: Vec<FxHashSet<usize>> = Vec::with_capacity(docs.len());

    for doc in docs {
        let mut refs = FxHashSet::default();
        for reference in doc.references.iter().flatten() {
            let index = match mapping.get(reference) {
                Some(index) => index,
                None => {
                    let index = next_index;
                    mapping.add(reference.clone(), index);
                    next_index += 1;
                    index
                }
            };
            refs.insert(index);
        }
        doc_refs.push(refs);
    }

    let mut strength: FxHashMap<(usize, usize), u64> = FxHashMap::default();
    for (i, refs) in doc_refs.iter().enumerate() {
        for (j, earlier) in doc_refs[..i].iter().enumerate() {
            let common = refs.intersection(earlier).count() as u64;
            if common > 0 {
                strength.insert((j, i), common);
            }
        }
    }

    for ((i, j), weight) in top_edges(strength, max_edges) {
        network.add_scored_edge(i, j, weight, weight);
    }

    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        virtual_refs = mapping.len() - docs.len(),
        max_edges,
        "built coupling network"
    );
    Ok(network)
}

//! Citation network construction

use super::base::{build_base_network, BuildOptions, BuildResult};
use crate::doc::DocumentSet;
use crate::graph::Network;
use rustc_hash::FxHashSet;
use tracing::info;

/// Build a citation network: a directed graph where each node corresponds
/// to a document and each edge indicates that one document cites another.
///
/// References that do not resolve to a document in the set are silently
/// dropped. Self-citations are skipped and repeated references collapse to
/// a single edge.
pub fn build_citation_network(
    docs: &DocumentSet,
    options: &BuildOptions,
) -> BuildResult<Network> {
    let (mut network, mapping) = build_base_network(docs, true, options)?;

    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    for (i, doc) in docs.iter().enumerate() {
        for reference in doc.references.iter().flatten() {
            if let Some(j) = mapping.get(reference) {
                if i != j && seen.insert((i, j)) {
                    network.add_edge(i, j);
                }
            }
        }
    }

    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "built citation network"
    );
    Ok(network)
}

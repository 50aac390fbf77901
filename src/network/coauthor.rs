//! Co-author network construction

use crate::doc::DocumentSet;
use crate::graph::{AttrValue, Network, NetworkNode};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

/// Build a co-author network: an undirected graph where nodes are authors
/// and edge weights count shared documents.
///
/// Authors with missing or empty names are excluded. Names are
/// de-duplicated within each document, so a name listed twice on one paper
/// counts as one occurrence and contributes at most 1 to any pair. When
/// `max_authors` is set and exceeded, only the top authors by document
/// count are retained (ties broken by name); edges are counted over the
/// retained set only.
///
/// Each node carries a `documents` attribute with the author's occurrence
/// count.
pub fn build_coauthor_network(docs: &DocumentSet, max_authors: Option<usize>) -> Network {
    // Occurrence counting, in first-appearance order
    let mut count: FxHashMap<&str, u64> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();

    for doc in docs {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for author in &doc.authors {
            if let Some(name) = author.usable_name() {
                if seen.insert(name) {
                    match count.get_mut(name) {
                        Some(c) => *c += 1,
                        None => {
                            count.insert(name, 1);
                            order.push(name);
                        }
                    }
                }
            }
        }
    }

    let mut retained = order;
    if let Some(max) = max_authors {
        if retained.len() > max {
            retained.sort_by(|a, b| count[b].cmp(&count[a]).then_with(|| a.cmp(b)));
            retained.truncate(max);
        }
    }

    let index_of: FxHashMap<&str, usize> = retained
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect();

    let mut network = Network::new(false);
    for name in &retained {
        let mut node = NetworkNode::new(*name);
        node.attrs
            .insert("documents".to_string(), AttrValue::Integer(count[name] as i64));
        network.add_node(node);
    }

    let mut pairs: FxHashMap<(usize, usize), u64> = FxHashMap::default();
    for doc in docs {
        let mut indices: Vec<usize> = doc
            .authors
            .iter()
            .filter_map(|author| author.usable_name())
            .filter_map(|name| index_of.get(name).copied())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        for (a, &i) in indices.iter().enumerate() {
            for &j in &indices[a + 1..] {
                *pairs.entry((i, j)).or_insert(0) += 1;
            }
        }
    }

    let mut edges: Vec<_> = pairs.into_iter().collect();
    edges.sort_unstable_by_key(|(pair, _)| *pair);
    for ((i, j), weight) in edges {
        network.add_weighted_edge(i, j, weight);
    }

    info!(
        authors = network.node_count(),
        edges = network.edge_count(),
        "built co-author network"
    );
    network
}

//! In-memory network model produced by the graph builders

use super::attr::AttrMap;
use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A node in a built network
///
/// Nodes carry:
/// - A display title (document title or author name)
/// - An attribute bag copied from the source document columns
/// - An optional computed color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Display title, also used for labels and tooltips
    pub title: String,

    /// Attributes copied onto this node
    #[serde(default)]
    pub attrs: AttrMap,

    /// Computed color, if a coloring was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl NetworkNode {
    pub fn new(title: impl Into<String>) -> Self {
        NetworkNode {
            title: title.into(),
            attrs: AttrMap::new(),
            color: None,
        }
    }
}

/// An edge between two node indices
///
/// Weight and score are aggregation counts; unweighted relationships
/// (citation) leave both unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: usize,
    pub target: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
}

/// A built relationship network: nodes indexed densely from 0, edges
/// referring to node indices.
///
/// Node indices are stable for the lifetime of the network; builders assign
/// index = position of the document (or retained author) in the input set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub directed: bool,
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl Network {
    pub fn new(directed: bool) -> Self {
        Network {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a node, returning its index
    pub fn add_node(&mut self, node: NetworkNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Append an unweighted edge
    pub fn add_edge(&mut self, source: usize, target: usize) {
        self.edges.push(NetworkEdge {
            source,
            target,
            weight: None,
            score: None,
        });
    }

    /// Append a weighted edge
    pub fn add_weighted_edge(&mut self, source: usize, target: usize, weight: u64) {
        self.edges.push(NetworkEdge {
            source,
            target,
            weight: Some(weight),
            score: None,
        });
    }

    /// Append an edge carrying both a weight and a score
    pub fn add_scored_edge(&mut self, source: usize, target: usize, weight: u64, score: u64) {
        self.edges.push(NetworkEdge {
            source,
            target,
            weight: Some(weight),
            score: Some(score),
        });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total degree of every node (each edge counts at both endpoints)
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.nodes.len()];
        for edge in &self.edges {
            degrees[edge.source] += 1;
            degrees[edge.target] += 1;
        }
        degrees
    }

    /// In-degree of every node; meaningful for directed networks
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.nodes.len()];
        for edge in &self.edges {
            degrees[edge.target] += 1;
        }
        degrees
    }

    /// Look up an edge by endpoints. For undirected networks the endpoint
    /// order is ignored.
    pub fn find_edge(&self, source: usize, target: usize) -> Option<&NetworkEdge> {
        self.edges.iter().find(|e| {
            (e.source == source && e.target == target)
                || (!self.directed && e.source == target && e.target == source)
        })
    }
}

//! Shared types for layout algorithms
//!
//! Provides a read-only adjacency view of the graph topology plus the
//! configuration and strategy trait the concrete algorithms implement.

/// A 2D node position
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };
}

/// Undirected adjacency view consumed by the layout algorithms
///
/// Edge direction is irrelevant for force simulation, so directed inputs
/// are flattened: every edge appears in the neighbor list of both
/// endpoints. Self-loops are dropped.
pub struct LayoutGraph {
    /// Number of nodes
    pub node_count: usize,
    /// Neighbor indices per node
    pub neighbors: Vec<Vec<usize>>,
    /// Edge weights aligned with `neighbors`
    pub weights: Vec<Vec<f64>>,
}

impl LayoutGraph {
    /// Build a view from weighted (source, target, weight) edges
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut neighbors = vec![Vec::new(); node_count];
        let mut weights = vec![Vec::new(); node_count];

        for &(source, target, weight) in edges {
            if source == target {
                continue;
            }
            neighbors[source].push(target);
            weights[source].push(weight);
            neighbors[target].push(source);
            weights[target].push(weight);
        }

        LayoutGraph {
            node_count,
            neighbors,
            weights,
        }
    }

    /// Degree of a node (neighbor entries, parallel edges counted)
    pub fn degree(&self, idx: usize) -> usize {
        self.neighbors[idx].len()
    }
}

/// Which layout algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Degree-weighted repulsion with linear attraction
    #[default]
    ForceAtlas2,
    /// Fruchterman-Reingold spring embedding
    Spring,
}

/// Layout configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub algorithm: Algorithm,
    /// Number of simulation steps
    pub iterations: usize,
    /// Pull toward the origin, keeping disconnected parts nearby
    pub gravity: f64,
    /// Repulsion strength multiplier
    pub scaling_ratio: f64,
    /// RNG seed for initial placement; identical inputs and seed give
    /// identical layouts
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::ForceAtlas2,
            iterations: 1000,
            gravity: 1.0,
            scaling_ratio: 1.0,
            seed: 42,
        }
    }
}

/// Strategy interface implemented by the concrete layout algorithms
pub trait LayoutAlgorithm {
    /// Compute one position per node, indexed like the graph
    fn compute(&self, graph: &LayoutGraph, config: &LayoutConfig) -> Vec<Position>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_is_undirected() {
        let graph = LayoutGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)]);
        assert_eq!(graph.neighbors[0], vec![1]);
        assert_eq!(graph.neighbors[1], vec![0, 2]);
        assert_eq!(graph.neighbors[2], vec![1]);
        assert_eq!(graph.weights[1], vec![1.0, 2.0]);
        assert_eq!(graph.degree(1), 2);
    }

    #[test]
    fn test_self_loops_are_dropped() {
        let graph = LayoutGraph::from_edges(2, &[(0, 0, 1.0), (0, 1, 1.0)]);
        assert_eq!(graph.neighbors[0], vec![1]);
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.algorithm, Algorithm::ForceAtlas2);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.seed, 42);
    }
}

pub mod common;
pub mod forceatlas;
pub mod spring;

pub use common::{Algorithm, LayoutAlgorithm, LayoutConfig, LayoutGraph, Position};
pub use forceatlas::ForceAtlas2Layout;
pub use spring::SpringLayout;

/// Run the algorithm selected in the configuration
pub fn compute_layout(graph: &LayoutGraph, config: &LayoutConfig) -> Vec<Position> {
    let algorithm: Box<dyn LayoutAlgorithm> = match config.algorithm {
        Algorithm::ForceAtlas2 => Box::new(ForceAtlas2Layout),
        Algorithm::Spring => Box::new(SpringLayout),
    };
    algorithm.compute(graph, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_concrete_algorithm() {
        let graph = LayoutGraph::from_edges(3, &[(0, 1, 1.0)]);
        let config = LayoutConfig {
            algorithm: Algorithm::Spring,
            iterations: 30,
            ..Default::default()
        };
        let dispatched = compute_layout(&graph, &config);
        let direct = SpringLayout.compute(&graph, &config);
        assert_eq!(dispatched, direct);
    }
}

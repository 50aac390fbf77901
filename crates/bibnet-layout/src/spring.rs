//! Fruchterman-Reingold spring layout
//!
//! Simpler fallback to ForceAtlas2: repulsion k²/d, attraction d²/k, and a
//! linearly cooling temperature that caps per-step movement. Positions
//! start in the unit square; `gravity` is not used by this algorithm.

use super::common::{LayoutAlgorithm, LayoutConfig, LayoutGraph, Position};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const MIN_DIST: f64 = 0.01;

pub struct SpringLayout;

impl LayoutAlgorithm for SpringLayout {
    fn compute(&self, graph: &LayoutGraph, config: &LayoutConfig) -> Vec<Position> {
        let n = graph.node_count;
        if n == 0 {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut pos: Array2<f64> = Array2::zeros((n, 2));
        for i in 0..n {
            pos[[i, 0]] = rng.gen_range(0.0..1.0);
            pos[[i, 1]] = rng.gen_range(0.0..1.0);
        }

        // Optimal pair distance for a unit-area frame
        let k = (1.0 / n as f64).sqrt();
        let mut temperature = 0.1;
        let cooling = temperature / (config.iterations as f64 + 1.0);

        for _ in 0..config.iterations {
            let pushed: Vec<[f64; 2]> = (0..n)
                .into_par_iter()
                .map(|i| {
                    let xi = pos[[i, 0]];
                    let yi = pos[[i, 1]];
                    let mut dx = 0.0;
                    let mut dy = 0.0;
                    for j in 0..n {
                        if i == j {
                            continue;
                        }
                        let ddx = xi - pos[[j, 0]];
                        let ddy = yi - pos[[j, 1]];
                        let dist = (ddx * ddx + ddy * ddy).sqrt().max(MIN_DIST);
                        let force = k * k / dist;
                        dx += ddx / dist * force;
                        dy += ddy / dist * force;
                    }
                    [dx, dy]
                })
                .collect();

            let mut disp = Array2::zeros((n, 2));
            for (i, d) in pushed.into_iter().enumerate() {
                disp[[i, 0]] = d[0];
                disp[[i, 1]] = d[1];
            }

            for i in 0..n {
                for (e, &j) in graph.neighbors[i].iter().enumerate() {
                    let weight = graph.weights[i][e];
                    let ddx = pos[[i, 0]] - pos[[j, 0]];
                    let ddy = pos[[i, 1]] - pos[[j, 1]];
                    let dist = (ddx * ddx + ddy * ddy).sqrt().max(MIN_DIST);
                    let force = dist * dist / k * weight;
                    disp[[i, 0]] -= ddx / dist * force;
                    disp[[i, 1]] -= ddy / dist * force;
                }
            }

            // Cap movement by the current temperature, then cool
            for i in 0..n {
                let dx = disp[[i, 0]];
                let dy = disp[[i, 1]];
                let length = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
                let step = length.min(temperature);
                pos[[i, 0]] += dx / length * step;
                pos[[i, 1]] += dy / length * step;
            }
            temperature -= cooling;
        }

        (0..n)
            .map(|i| Position {
                x: pos[[i, 0]],
                y: pos[[i, 1]],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Algorithm;

    fn config(iterations: usize) -> LayoutConfig {
        LayoutConfig {
            algorithm: Algorithm::Spring,
            iterations,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_position_per_node() {
        let graph = LayoutGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let positions = SpringLayout.compute(&graph, &config(50));
        assert_eq!(positions.len(), 3);
        for p in &positions {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let graph = LayoutGraph::from_edges(4, &[(0, 1, 1.0), (2, 3, 3.0)]);
        let a = SpringLayout.compute(&graph, &config(80));
        let b = SpringLayout.compute(&graph, &config(80));
        assert_eq!(a, b);
    }

    #[test]
    fn test_singleton_graph() {
        let graph = LayoutGraph::from_edges(1, &[]);
        let positions = SpringLayout.compute(&graph, &config(20));
        assert_eq!(positions.len(), 1);
    }
}

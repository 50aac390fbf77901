//! ForceAtlas2-style force-directed layout
//!
//! Degree-weighted repulsion, linear attraction along edges, gravity
//! toward the origin, and adaptive global speed damping based on how much
//! nodes swing between iterations.

use super::common::{LayoutAlgorithm, LayoutConfig, LayoutGraph, Position};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Distance floor avoiding singular forces for coincident nodes
const MIN_DIST: f64 = 0.01;

/// How much target speed may rise per iteration, as a fraction
const MAX_RISE: f64 = 0.5;

const JITTER_TOLERANCE: f64 = 1.0;

pub struct ForceAtlas2Layout;

impl LayoutAlgorithm for ForceAtlas2Layout {
    fn compute(&self, graph: &LayoutGraph, config: &LayoutConfig) -> Vec<Position> {
        let n = graph.node_count;
        if n == 0 {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut pos: Array2<f64> = Array2::zeros((n, 2));
        for i in 0..n {
            pos[[i, 0]] = rng.gen_range(-1.0..1.0);
            pos[[i, 1]] = rng.gen_range(-1.0..1.0);
        }

        let degrees: Vec<f64> = (0..n).map(|i| graph.degree(i) as f64).collect();
        let mut prev: Array2<f64> = Array2::zeros((n, 2));
        let mut global_speed = 1.0_f64;

        for _ in 0..config.iterations {
            // Repulsion between all pairs plus gravity, per node. Rows are
            // collected in index order, so the pass is deterministic.
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
                        let force = config.scaling_ratio * (degrees[i] + 1.0)
                            * (degrees[j] + 1.0)
                            / dist;
                        dx += ddx / dist * force;
                        dy += ddy / dist * force;
                    }

                    let dist = (xi * xi + yi * yi).sqrt().max(MIN_DIST);
                    let pull = config.gravity * (degrees[i] + 1.0);
                    dx -= xi / dist * pull;
                    dy -= yi / dist * pull;

                    [dx, dy]
                })
                .collect();

            let mut disp = Array2::zeros((n, 2));
            for (i, d) in pushed.into_iter().enumerate() {
                disp[[i, 0]] = d[0];
                disp[[i, 1]] = d[1];
            }

            // Linear attraction along edges; each endpoint handles its own
            // row, symmetry comes from the mirrored adjacency entries
            for i in 0..n {
                for (k, &j) in graph.neighbors[i].iter().enumerate() {
                    let weight = graph.weights[i][k];
                    disp[[i, 0]] -= (pos[[i, 0]] - pos[[j, 0]]) * weight;
                    disp[[i, 1]] -= (pos[[i, 1]] - pos[[j, 1]]) * weight;
                }
            }

            // Swinging is disagreement between this step and the last;
            // traction is their agreement. High swinging means the layout
            // is oscillating and the global speed should drop.
            let mut swings = vec![0.0_f64; n];
            let mut swinging = 0.0;
            let mut traction = 0.0;
            for i in 0..n {
                let dx = disp[[i, 0]];
                let dy = disp[[i, 1]];
                let px = prev[[i, 0]];
                let py = prev[[i, 1]];
                let swing = ((dx - px).powi(2) + (dy - py).powi(2)).sqrt();
                let tract = ((dx + px).powi(2) + (dy + py).powi(2)).sqrt() / 2.0;
                swings[i] = swing;
                swinging += (degrees[i] + 1.0) * swing;
                traction += (degrees[i] + 1.0) * tract;
            }

            let target_speed = if swinging > 0.0 {
                JITTER_TOLERANCE * JITTER_TOLERANCE * traction / swinging
            } else {
                global_speed
            };
            global_speed += (target_speed - global_speed).min(MAX_RISE * global_speed);
            global_speed = global_speed.max(f64::EPSILON);

            for i in 0..n {
                let factor = global_speed / (1.0 + (global_speed * swings[i]).sqrt());
                pos[[i, 0]] += disp[[i, 0]] * factor;
                pos[[i, 1]] += disp[[i, 1]] * factor;
            }
            prev = disp;
        }

        (0..n)
            .map(|i| Position {
                x: pos[[i, 0]],
                y: pos[[i, 1]],
            })
            .collect()
    }
}

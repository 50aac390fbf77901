//! Top-K edge pruning shared by the weighted builders

use rustc_hash::FxHashMap;

/// Reduce an aggregated pair-strength map to at most `max_edges` entries,
/// keeping the strongest.
///
/// Entries are ordered by weight descending, then by (source, target) pair
/// ascending, so identical input always yields identical output. The
/// returned list keeps that order, which makes downstream edge insertion
/// reproducible too.
pub fn top_edges(
    strengths: FxHashMap<(usize, usize), u64>,
    max_edges: usize,
) -> Vec<((usize, usize), u64)> {
    let mut edges: Vec<_> = strengths.into_iter().collect();
    edges.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    edges.truncate(max_edges);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strengths(entries: &[((usize, usize), u64)]) -> FxHashMap<(usize, usize), u64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_under_limit_keeps_everything() {
        let map = strengths(&[((0, 1), 3), ((1, 2), 1)]);
        let edges = top_edges(map, 10);
        assert_eq!(edges, vec![((0, 1), 3), ((1, 2), 1)]);
    }

    #[test]
    fn test_over_limit_keeps_strongest() {
        let map = strengths(&[((0, 1), 1), ((0, 2), 5), ((1, 2), 3), ((2, 3), 4)]);
        let edges = top_edges(map, 2);
        assert_eq!(edges, vec![((0, 2), 5), ((2, 3), 4)]);
    }

    #[test]
    fn test_no_weaker_edge_survives_a_stronger_one() {
        let map = strengths(&[
            ((0, 1), 7),
            ((0, 2), 2),
            ((0, 3), 9),
            ((1, 2), 4),
            ((1, 3), 1),
        ]);
        let kept = top_edges(map.clone(), 3);
        assert_eq!(kept.len(), 3);

        let min_kept = kept.iter().map(|(_, w)| *w).min().unwrap();
        let kept_pairs: Vec<_> = kept.iter().map(|(p, _)| *p).collect();
        for (pair, weight) in map {
            if !kept_pairs.contains(&pair) {
                assert!(weight <= min_kept);
            }
        }
    }

    #[test]
    fn test_ties_break_by_pair_order() {
        let map = strengths(&[((1, 2), 5), ((0, 3), 5), ((0, 1), 5)]);
        let edges = top_edges(map, 2);
        assert_eq!(edges, vec![((0, 1), 5), ((0, 3), 5)]);
    }

    #[test]
    fn test_zero_max_edges() {
        let map = strengths(&[((0, 1), 1)]);
        assert!(top_edges(map, 0).is_empty());
    }
}

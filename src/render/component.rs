//! Connected-component selection for rendering

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Membership mask of the largest connected component, ignoring edge
/// direction (weak connectivity for directed graphs).
///
/// Ties between equally sized components go to the one containing the
/// smallest node index, so the result is deterministic.
pub(crate) fn largest_component_mask(
    node_count: usize,
    edges: impl Iterator<Item = (usize, usize)>,
) -> Vec<bool> {
    let mut uf = UnionFind::new(node_count);
    for (source, target) in edges {
        uf.union(source, target);
    }

    let mut size = vec![0usize; node_count];
    let roots: Vec<usize> = (0..node_count).map(|i| uf.find(i)).collect();
    for &root in &roots {
        size[root] += 1;
    }

    // Roots are the smallest index reachable only by chance; scanning
    // ascending picks the component with the smallest member on ties.
    let mut best_root = 0;
    let mut best_size = 0;
    for i in 0..node_count {
        let root = roots[i];
        if size[root] > best_size {
            best_size = size[root];
            best_root = root;
        }
    }

    roots.into_iter().map(|root| root == best_root).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_component_wins() {
        // 0-1 and 2-3-4: the triple is the largest component
        let edges = vec![(0, 1), (2, 3), (3, 4)];
        let mask = largest_component_mask(5, edges.into_iter());
        assert_eq!(mask, vec![false, false, true, true, true]);
    }

    #[test]
    fn test_direction_is_ignored() {
        // 2 -> 1 -> 0 forms one weak component
        let edges = vec![(2, 1), (1, 0)];
        let mask = largest_component_mask(3, edges.into_iter());
        assert_eq!(mask, vec![true, true, true]);
    }

    #[test]
    fn test_tie_goes_to_smallest_member() {
        let edges = vec![(3, 4), (0, 1)];
        let mask = largest_component_mask(5, edges.into_iter());
        assert_eq!(mask, vec![true, true, false, false, false]);
    }

    #[test]
    fn test_isolates_are_singletons() {
        let edges = vec![(0, 1)];
        let mask = largest_component_mask(4, edges.into_iter());
        assert_eq!(mask, vec![true, true, false, false]);
    }
}

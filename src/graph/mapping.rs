//! Identity mapping from external document ids to dense node indices

use rustc_hash::FxHashMap;

/// Bidirectional mapping from an external document/author identifier to a
/// dense integer node index.
///
/// Builders assign indices in insertion order; the mapping also accepts ids
/// outside the original document set (virtual reference nodes during
/// coupling aggregation). Lookup is O(1) expected.
#[derive(Debug, Clone, Default)]
pub struct DocumentMapping {
    id_to_index: FxHashMap<String, usize>,
    index_to_id: FxHashMap<usize, String>,
}

impl DocumentMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new association. Duplicate adds are ignored: the first
    /// mapping wins and `false` is returned.
    pub fn add(&mut self, id: impl Into<String>, index: usize) -> bool {
        let id = id.into();
        if self.id_to_index.contains_key(&id) {
            return false;
        }
        self.index_to_id.insert(index, id.clone());
        self.id_to_index.insert(id, index);
        true
    }

    /// Node index for an external id, if mapped
    pub fn get(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// External id for a node index, if mapped
    pub fn get_id(&self, index: usize) -> Option<&str> {
        self.index_to_id.get(&index).map(|s| s.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.id_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut mapping = DocumentMapping::new();
        assert!(mapping.add("10.1000/a", 0));
        assert!(mapping.add("10.1000/b", 1));

        assert_eq!(mapping.get("10.1000/a"), Some(0));
        assert_eq!(mapping.get("10.1000/b"), Some(1));
        assert_eq!(mapping.get("10.1000/missing"), None);
        assert_eq!(mapping.get_id(1), Some("10.1000/b"));
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut mapping = DocumentMapping::new();
        assert!(mapping.add("doc", 0));
        assert!(!mapping.add("doc", 5));
        // First mapping wins
        assert_eq!(mapping.get("doc"), Some(0));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_empty() {
        let mapping = DocumentMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.get("anything"), None);
    }
}

//! Ordered document collection with column-style attribute access

use super::document::Document;
use crate::graph::AttrValue;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a document set
#[derive(Error, Debug)]
pub enum DocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type DocResult<T> = Result<T, DocError>;

/// An ordered collection of documents
///
/// Document position in the set is the node index the graph builders
/// assign, so iteration order is load order. Serializes transparently as a
/// JSON array of document records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentSet {
    docs: Vec<Document>,
}

impl DocumentSet {
    pub fn new(docs: Vec<Document>) -> Self {
        DocumentSet { docs }
    }

    /// Load a document set from a JSON array string
    pub fn from_json_str(json: &str) -> DocResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document set from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> DocResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.docs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    /// Column-style accessor: one value per document, `Null` where a
    /// document lacks the attribute. Returns `None` when no document in
    /// the set carries the column at all.
    pub fn column(&self, name: &str) -> Option<Vec<AttrValue>> {
        if !self.docs.iter().any(|doc| doc.attrs.contains_key(name)) {
            return None;
        }
        Some(
            self.docs
                .iter()
                .map(|doc| doc.attrs.get(name).cloned().unwrap_or(AttrValue::Null))
                .collect(),
        )
    }

    /// Union of attribute names across the set, in first-seen order
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for doc in &self.docs {
            for name in doc.attrs.keys() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

impl From<Vec<Document>> for DocumentSet {
    fn from(docs: Vec<Document>) -> Self {
        DocumentSet::new(docs)
    }
}

impl FromIterator<Document> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        DocumentSet::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

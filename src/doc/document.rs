//! Document and author records

use crate::graph::{AttrMap, AttrValue};
use serde::{Deserialize, Serialize};

/// An author of a document
///
/// Names may be missing or empty; such authors are excluded from co-author
/// aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Author {
            name: Some(name.into()),
        }
    }

    /// Name usable for aggregation: present and non-empty
    pub fn usable_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

/// A bibliographic document record
///
/// Documents carry:
/// - An external identifier (DOI, database key, ...)
/// - A display title
/// - An ordered reference-id list (absent when the source lacks one)
/// - An author list
/// - Arbitrary named scalar attributes ("columns"), kept in insertion order
///
/// Unknown JSON keys deserialize into the attribute bag, so records load
/// directly from exported bibliography files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    #[serde(flatten)]
    pub attrs: AttrMap,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            references: None,
            authors: Vec::new(),
            attrs: AttrMap::new(),
        }
    }

    pub fn with_references<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = Some(refs.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = names.into_iter().map(Author::new).collect();
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Attribute value for a column, if set on this document
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let doc = Document::new("10.1/x", "A Study")
            .with_references(["10.1/y", "10.1/z"])
            .with_authors(["Alice", "Bob"])
            .with_attr("year", 2020i64);

        assert_eq!(doc.id, "10.1/x");
        assert_eq!(doc.references.as_ref().unwrap().len(), 2);
        assert_eq!(doc.authors.len(), 2);
        assert_eq!(doc.attr("year").unwrap().as_integer(), Some(2020));
    }

    #[test]
    fn test_usable_name() {
        assert_eq!(Author::new("Alice").usable_name(), Some("Alice"));
        assert_eq!(Author { name: Some(String::new()) }.usable_name(), None);
        assert_eq!(Author { name: None }.usable_name(), None);
    }

    #[test]
    fn test_unknown_json_keys_become_attrs() {
        let json = r#"{
            "id": "10.1/x",
            "title": "A Study",
            "authors": [{"name": "Alice"}],
            "year": 2019,
            "venue": "ICSE"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();

        assert_eq!(doc.attr("year").unwrap().as_integer(), Some(2019));
        assert_eq!(doc.attr("venue").unwrap().as_string(), Some("ICSE"));
        assert!(doc.references.is_none());
    }
}

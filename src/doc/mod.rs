//! Bibliographic document model
//!
//! Documents are the input to every graph builder: plain records with an
//! external identifier, a title, optional references, authors, and an
//! arbitrary attribute bag loaded from JSON.

pub mod document;
pub mod set;

// Re-export main types
pub use document::{Author, Document};
pub use set::{DocError, DocResult, DocumentSet};

//! Relationship network builders
//!
//! Four aggregators over a document set, all producing a `Network`:
//! - citation: directed, unweighted document-to-document edges
//! - co-citation: undirected, weight = documents citing both endpoints
//! - coupling: undirected, weight = shared references
//! - co-author: undirected over the author universe, weight = shared
//!   documents
//!
//! The weighted builders share the top-K pruning helper in [`prune`].

pub mod base;
pub mod citation;
pub mod coauthor;
pub mod cocitation;
pub mod coupling;
pub mod prune;

// Re-export main entry points
pub use base::{build_base_network, BuildError, BuildOptions, BuildResult, ColorSpec};
pub use citation::build_citation_network;
pub use coauthor::build_coauthor_network;
pub use cocitation::build_cocitation_network;
pub use coupling::build_coupling_network;
pub use prune::top_edges;

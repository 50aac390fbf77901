//! Bibliographic network analysis
//!
//! Builds relationship graphs over collections of scientific documents and
//! renders them as interactive HTML pages:
//!
//! - **Citation**: directed, document cites document
//! - **Co-citation**: undirected, two documents cited together
//! - **Bibliographic coupling**: undirected, two documents share references
//! - **Co-author**: undirected, two authors wrote together
//!
//! Edges in the aggregated networks carry weights (shared-reference or
//! shared-document counts), nodes can be colored by any document attribute,
//! and node positions are precomputed with a force-directed layout so the
//! generated page opens instantly in a browser.
//!
//! ## Example Usage
//!
//! ```rust
//! use bibnet::doc::{Document, DocumentSet};
//! use bibnet::network::{build_citation_network, BuildOptions};
//!
//! let docs = DocumentSet::new(vec![
//!     Document::new("10.1/a", "A Study of Things").with_references(["10.1/b"]),
//!     Document::new("10.1/b", "An Earlier Study"),
//! ]);
//!
//! let network = build_citation_network(&docs, &BuildOptions::default()).unwrap();
//! assert_eq!(network.node_count(), 2);
//! assert_eq!(network.edge_count(), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod doc;
pub mod graph;
pub mod network;
pub mod render;

// Re-export main types for convenience
pub use doc::{Author, DocError, DocResult, Document, DocumentSet};

pub use graph::{
    AttrMap, AttrValue, DocumentMapping, Network, NetworkEdge, NetworkNode,
};

pub use network::{
    build_citation_network, build_coauthor_network, build_cocitation_network,
    build_coupling_network, BuildError, BuildOptions, BuildResult, ColorSpec,
};

pub use render::{
    plot_citation_network, plot_coauthor_network, plot_cocitation_network,
    plot_coupling_network, render_network, render_to_html, PlotError, PlotResult,
    RenderError, RenderOptions, RenderResult, RenderSummary, DEFAULT_OUTPUT,
};

pub use color::{Color, DiscretePalette, Gradient, Palette};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}

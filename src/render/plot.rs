//! One-call build-and-render entry points

use super::html::{render_network, RenderError, RenderSummary};
use super::options::RenderOptions;
use crate::doc::DocumentSet;
use crate::network::{
    build_citation_network, build_coauthor_network, build_cocitation_network,
    build_coupling_network, BuildError, BuildOptions,
};
use std::path::Path;
use thiserror::Error;

/// Errors from the combined build-and-render helpers
#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type PlotResult<T> = Result<T, PlotError>;

/// Build a citation network and write its interactive page to `path`
pub fn plot_citation_network(
    docs: &DocumentSet,
    build: &BuildOptions,
    render: &RenderOptions,
    path: impl AsRef<Path>,
) -> PlotResult<RenderSummary> {
    let network = build_citation_network(docs, build)?;
    Ok(render_network(&network, render, path)?)
}

/// Build a co-citation network and write its interactive page to `path`
pub fn plot_cocitation_network(
    docs: &DocumentSet,
    max_edges: Option<usize>,
    build: &BuildOptions,
    render: &RenderOptions,
    path: impl AsRef<Path>,
) -> PlotResult<RenderSummary> {
    let network = build_cocitation_network(docs, max_edges, build)?;
    Ok(render_network(&network, render, path)?)
}

/// Build a bibliographic coupling network and write its interactive page
/// to `path`
pub fn plot_coupling_network(
    docs: &DocumentSet,
    max_edges: Option<usize>,
    build: &BuildOptions,
    render: &RenderOptions,
    path: impl AsRef<Path>,
) -> PlotResult<RenderSummary> {
    let network = build_coupling_network(docs, max_edges, build)?;
    Ok(render_network(&network, render, path)?)
}

/// Build a co-author network and write its interactive page to `path`
pub fn plot_coauthor_network(
    docs: &DocumentSet,
    max_authors: Option<usize>,
    render: &RenderOptions,
    path: impl AsRef<Path>,
) -> PlotResult<RenderSummary> {
    let network = build_coauthor_network(docs, max_authors);
    Ok(render_network(&network, render, path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Document;

    fn cited_set() -> DocumentSet {
        DocumentSet::new(vec![
            Document::new("d1", "First Study")
                .with_references(["d2", "d3"])
                .with_authors(["Alice", "Bob"]),
            Document::new("d2", "Second Study")
                .with_references(["d3"])
                .with_authors(["Bob", "Carol"]),
            Document::new("d3", "Third Study").with_authors(["Alice"]),
        ])
    }

    fn fast_render() -> RenderOptions {
        let mut options = RenderOptions::default();
        options.layout.iterations = 20;
        options
    }

    #[test]
    fn test_plot_citation_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citation.html");

        let summary =
            plot_citation_network(&cited_set(), &BuildOptions::default(), &fast_render(), &path)
                .unwrap();

        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 3);
        assert!(path.exists());
    }

    #[test]
    fn test_plot_coauthor_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coauthor.html");

        let summary =
            plot_coauthor_network(&cited_set(), None, &fast_render(), &path).unwrap();

        // Carol only co-authors with Bob, Alice with Bob
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 2);
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Alice"));
    }

    #[test]
    fn test_plot_propagates_build_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.html");

        let build = BuildOptions {
            colors: Some("missing_column".into()),
            ..Default::default()
        };
        let err = plot_citation_network(&cited_set(), &build, &fast_render(), &path).unwrap_err();
        assert!(matches!(err, PlotError::Build(BuildError::UnknownColumn(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_plot_propagates_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.html");

        // No document cites another, so the network has no edges
        let docs = DocumentSet::new(vec![
            Document::new("a", "Alpha"),
            Document::new("b", "Beta"),
        ]);
        let err =
            plot_citation_network(&docs, &BuildOptions::default(), &fast_render(), &path)
                .unwrap_err();
        assert!(matches!(err, PlotError::Render(RenderError::EmptyGraph)));
    }
}

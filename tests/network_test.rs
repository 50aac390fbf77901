use bibnet::doc::{Document, DocumentSet};
use bibnet::network::{
    build_citation_network, build_coauthor_network, build_cocitation_network,
    build_coupling_network, BuildError, BuildOptions, ColorSpec,
};
use bibnet::render::{plot_citation_network, render_network, RenderOptions};
use bibnet::AttrValue;

// Three documents:
//   D1 cites D2, D3 and one reference outside the set
//   D2 cites D3
//   D3 cites nothing
fn worked_example() -> DocumentSet {
    DocumentSet::new(vec![
        Document::new("D1", "Survey of the Field").with_references(["D2", "D3", "X99"]),
        Document::new("D2", "A Method").with_references(["D3"]),
        Document::new("D3", "Foundations"),
    ])
}

fn fast_render() -> RenderOptions {
    let mut options = RenderOptions::default();
    options.layout.iterations = 25;
    options
}

#[test]
fn test_citation_edges() {
    let network = build_citation_network(&worked_example(), &BuildOptions::default()).unwrap();

    assert!(network.directed);
    assert_eq!(network.node_count(), 3);
    assert_eq!(network.edge_count(), 3);
    // D1 -> D2, D1 -> D3, D2 -> D3; the outside reference is dropped
    assert!(network.find_edge(0, 1).is_some());
    assert!(network.find_edge(0, 2).is_some());
    assert!(network.find_edge(1, 2).is_some());
}

#[test]
fn test_cocitation_edges() {
    let network =
        build_cocitation_network(&worked_example(), None, &BuildOptions::default()).unwrap();

    assert!(!network.directed);
    assert_eq!(network.node_count(), 3);
    // Only D2 and D3 are ever cited together (both by D1)
    assert_eq!(network.edge_count(), 1);
    assert_eq!(network.find_edge(1, 2).unwrap().weight, Some(1));
}

#[test]
fn test_coupling_edges() {
    let network =
        build_coupling_network(&worked_example(), None, &BuildOptions::default()).unwrap();

    assert!(!network.directed);
    // D1 and D2 share the single reference D3
    assert_eq!(network.edge_count(), 1);
    let edge = network.find_edge(0, 1).unwrap();
    assert_eq!(edge.weight, Some(1));
    assert_eq!(edge.score, Some(1));
}

#[test]
fn test_coupling_counts_references_outside_the_set() {
    // Both documents cite the same work that is not itself in the set
    let docs = DocumentSet::new(vec![
        Document::new("a", "Alpha").with_references(["outside", "b"]),
        Document::new("b", "Beta").with_references(["outside"]),
    ]);
    let network = build_coupling_network(&docs, None, &BuildOptions::default()).unwrap();

    assert_eq!(network.find_edge(0, 1).unwrap().weight, Some(1));
}

#[test]
fn test_cocitation_max_edges_keeps_strongest() {
    let docs = DocumentSet::new(vec![
        Document::new("a", "Alpha").with_references(["b", "c"]),
        Document::new("b", "Beta"),
        Document::new("c", "Gamma"),
        Document::new("d", "Delta").with_references(["b", "c", "e"]),
        Document::new("e", "Epsilon"),
    ]);
    // Pair weights: (b,c) = 2, (b,e) = 1, (c,e) = 1
    let network = build_cocitation_network(&docs, Some(1), &BuildOptions::default()).unwrap();

    assert_eq!(network.edge_count(), 1);
    assert_eq!(network.find_edge(1, 2).unwrap().weight, Some(2));
}

#[test]
fn test_coauthor_weights() {
    let docs = DocumentSet::new(vec![
        Document::new("p1", "Paper One").with_authors(["Alice", "Bob"]),
        Document::new("p2", "Paper Two").with_authors(["Alice", "Bob", "Carol"]),
        Document::new("p3", "Paper Three").with_authors(["Carol"]),
    ]);
    let network = build_coauthor_network(&docs, None);

    assert!(!network.directed);
    assert_eq!(network.node_count(), 3);
    assert_eq!(network.find_edge(0, 1).unwrap().weight, Some(2));
    assert_eq!(network.nodes[2].title, "Carol");
    assert_eq!(network.nodes[2].attrs["documents"].as_integer(), Some(2));
}

#[test]
fn test_json_to_colored_network() {
    let json = r#"[
        {"id": "D1", "title": "Survey of the Field", "references": ["D2", "D3"], "year": 2021},
        {"id": "D2", "title": "A Method", "references": ["D3"], "year": 2019},
        {"id": "D3", "title": "Foundations", "year": 2015}
    ]"#;
    let docs = DocumentSet::from_json_str(json).unwrap();

    let options = BuildOptions {
        colors: Some("year".into()),
        ..Default::default()
    };
    let network = build_citation_network(&docs, &options).unwrap();

    assert!(network.nodes.iter().all(|n| n.color.is_some()));
    // Three distinct years, three distinct category colors
    let first = network.nodes[0].color;
    assert_ne!(first, network.nodes[1].color);
    // Attributes were copied onto the nodes
    assert_eq!(network.nodes[0].attrs["year"], AttrValue::Integer(2021));
}

#[test]
fn test_unknown_color_column_is_an_error() {
    let err = build_citation_network(
        &worked_example(),
        &BuildOptions {
            colors: Some(ColorSpec::Column("nope".to_string())),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(matches!(err, BuildError::UnknownColumn(name) if name == "nope"));
}

#[test]
fn test_explicit_color_values_must_match_length() {
    let err = build_citation_network(
        &worked_example(),
        &BuildOptions {
            colors: Some(ColorSpec::Values(vec![AttrValue::Integer(1)])),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        BuildError::ColorLengthMismatch {
            expected: 3,
            actual: 1
        }
    ));
}

#[test]
fn test_render_writes_interactive_page() {
    let network = build_citation_network(&worked_example(), &BuildOptions::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.html");
    let summary = render_network(&network, &fast_render(), &path).unwrap();

    assert_eq!(summary.nodes, 3);
    assert_eq!(summary.edges, 3);

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Survey of the Field"));
    assert!(html.contains("vis.Network"));
    assert!(html.contains("forceAtlas2Based"));
}

#[test]
fn test_plot_citation_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("citation.html");

    let summary = plot_citation_network(
        &worked_example(),
        &BuildOptions::default(),
        &fast_render(),
        &path,
    )
    .unwrap();

    assert_eq!(summary.nodes, 3);
    assert!(path.exists());
}

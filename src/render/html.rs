//! Interactive HTML artifact generation
//!
//! Filters the network for display (isolates, largest component), rescales
//! node sizes, runs the configured layout, and embeds the result into a
//! self-contained page driving the vis-network widget.

use super::component::largest_component_mask;
use super::options::RenderOptions;
use crate::graph::{AttrValue, Network};
use bibnet_layout::{compute_layout, LayoutGraph};
use rustc_hash::FxHashMap;
use serde_json::json;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("network has no edges to draw")]
    EmptyGraph,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Default artifact filename
pub const DEFAULT_OUTPUT: &str = "citation.html";

const TEMPLATE: &str = include_str!("viewer.html");

/// Label lines wrap at this many characters
const LABEL_WIDTH: usize = 20;

/// What survived filtering and went into the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Render a network into a self-contained HTML page
pub fn render_to_html(network: &Network, options: &RenderOptions) -> RenderResult<String> {
    Ok(build_page(network, options)?.0)
}

/// Render a network and write the artifact to `path`
pub fn render_network(
    network: &Network,
    options: &RenderOptions,
    path: impl AsRef<Path>,
) -> RenderResult<RenderSummary> {
    let (html, summary) = build_page(network, options)?;
    std::fs::write(path.as_ref(), html)?;
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        path = %path.as_ref().display(),
        "wrote network artifact"
    );
    Ok(summary)
}

fn build_page(
    network: &Network,
    options: &RenderOptions,
) -> RenderResult<(String, RenderSummary)> {
    // Isolated nodes never render
    let mut alive: Vec<bool> = network.degrees().iter().map(|&d| d > 0).collect();
    let isolates = alive.iter().filter(|&&a| !a).count();
    if isolates > 0 {
        debug!(isolates, "removing isolated nodes");
    }

    if network.edge_count() == 0 {
        return Err(RenderError::EmptyGraph);
    }

    if options.largest_component {
        let mask = largest_component_mask(
            network.node_count(),
            network.edges.iter().map(|e| (e.source, e.target)),
        );
        for (a, keep) in alive.iter_mut().zip(mask) {
            *a = *a && keep;
        }
    }

    let kept: Vec<usize> = (0..network.node_count()).filter(|&i| alive[i]).collect();
    let dense: FxHashMap<usize, usize> = kept
        .iter()
        .enumerate()
        .map(|(d, &original)| (original, d))
        .collect();
    let edges: Vec<(usize, usize, Option<u64>)> = network
        .edges
        .iter()
        .filter(|e| alive[e.source] && alive[e.target])
        .map(|e| (dense[&e.source], dense[&e.target], e.weight))
        .collect();

    let sizes = node_sizes(network, &kept, &edges, options);

    let layout_edges: Vec<(usize, usize, f64)> = edges
        .iter()
        .map(|&(source, target, weight)| (source, target, weight.unwrap_or(1) as f64))
        .collect();
    let graph = LayoutGraph::from_edges(kept.len(), &layout_edges);
    let positions = compute_layout(&graph, &options.layout);

    let mut node_payloads = Vec::with_capacity(kept.len());
    for (d, &original) in kept.iter().enumerate() {
        let node = &network.nodes[original];
        let mut payload = json!({
            "id": d,
            "shape": "dot",
            "title": node.title,
            "label": word_wrap(&node.title, LABEL_WIDTH),
            "size": sizes[d],
            "labelHighlightBold": true,
            "x": positions[d].x * options.scale,
            "y": positions[d].y * options.scale,
        });
        if let Some(color) = node.color {
            payload["color"] = json!(color.to_css());
        }
        node_payloads.push(payload);
    }

    let mut edge_payloads = Vec::with_capacity(edges.len());
    for &(source, target, weight) in &edges {
        let mut payload = json!({ "from": source, "to": target });
        if let Some(weight) = weight {
            payload["width"] = json!(weight);
            payload["title"] = json!(weight.to_string());
        }
        edge_payloads.push(payload);
    }

    let smooth = options.smooth_edges.unwrap_or(edges.len() < 1000);
    let widget_options = json!({
        "configure": { "enabled": options.controls },
        "nodes": { "font": { "size": 7 } },
        "edges": {
            "smooth": smooth,
            "color": { "opacity": 0.25 },
            "arrows": { "to": { "enabled": network.directed } },
        },
        "physics": {
            "enabled": options.interactive,
            "forceAtlas2Based": { "springLength": 100 },
            "solver": "forceAtlas2Based",
        },
    });

    // The payloads land inside a <script> block; close tags must not
    // terminate it early
    let nodes_json = serde_json::to_string(&node_payloads)?.replace("</", "<\\/");
    let edges_json = serde_json::to_string(&edge_payloads)?.replace("</", "<\\/");
    let options_json = serde_json::to_string(&widget_options)?.replace("</", "<\\/");

    let html = TEMPLATE
        .replace("{{HEIGHT}}", &options.height)
        .replace("{{NODES_JSON}}", &nodes_json)
        .replace("{{EDGES_JSON}}", &edges_json)
        .replace("{{OPTIONS_JSON}}", &options_json);

    Ok((
        html,
        RenderSummary {
            nodes: kept.len(),
            edges: edges.len(),
        },
    ))
}

/// Node sizes for the filtered subgraph, linearly rescaled into
/// [min_node_size, max_node_size].
///
/// When every kept node carries a numeric `weight` attribute those values
/// drive the sizes; otherwise in-degree (directed) or total degree is
/// used. A zero maximum collapses everything to the minimum size.
fn node_sizes(
    network: &Network,
    kept: &[usize],
    edges: &[(usize, usize, Option<u64>)],
    options: &RenderOptions,
) -> Vec<f64> {
    let weights: Option<Vec<f64>> = kept
        .iter()
        .map(|&i| network.nodes[i].attrs.get("weight").and_then(AttrValue::as_number))
        .collect();

    let raw: Vec<f64> = match weights {
        Some(values) => values,
        None => {
            let mut degrees = vec![0usize; kept.len()];
            for &(source, target, _) in edges {
                if network.directed {
                    degrees[target] += 1;
                } else {
                    degrees[source] += 1;
                    degrees[target] += 1;
                }
            }
            degrees.into_iter().map(|d| d as f64).collect()
        }
    };

    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return vec![options.min_node_size; raw.len()];
    }
    let ratio = (options.max_node_size - options.min_node_size) / max;
    raw.into_iter()
        .map(|s| ratio * s + options.min_node_size)
        .collect()
}

/// Greedy word wrap used for node labels. Width is measured in
/// characters, not bytes.
fn word_wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(current);
            current = word.to_string();
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

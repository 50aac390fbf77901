//! Base graph construction shared by the document-node builders
//!
//! Creates one node per document (index = position in the set), copies the
//! requested attribute columns onto the nodes, computes node colors, and
//! returns the identity mapping the aggregators resolve references
//! against.

use crate::color::{min_max_normalize, Color, DiscretePalette, Gradient, Palette};
use crate::doc::DocumentSet;
use crate::graph::{AttrValue, DocumentMapping, Network, NetworkNode};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during network construction
#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("color sequence has {actual} values for {expected} documents")]
    ColorLengthMismatch { expected: usize, actual: usize },

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Where node colors come from
#[derive(Debug, Clone)]
pub enum ColorSpec {
    /// Pull values from a named document column
    Column(String),
    /// Explicit values, one per document
    Values(Vec<AttrValue>),
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Column(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Column(name)
    }
}

impl From<Vec<AttrValue>> for ColorSpec {
    fn from(values: Vec<AttrValue>) -> Self {
        ColorSpec::Values(values)
    }
}

/// Options for the base graph builder
///
/// `node_attrs = None` copies every document column onto the nodes.
/// `palette = None` picks the default gradient (numeric values) or the
/// default qualitative palette (categorical values).
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub colors: Option<ColorSpec>,
    pub palette: Option<Palette>,
    pub node_attrs: Option<Vec<String>>,
}

/// Build the shared base network: one node per document, plus the identity
/// mapping from document id to node index.
pub fn build_base_network(
    docs: &DocumentSet,
    directed: bool,
    options: &BuildOptions,
) -> BuildResult<(Network, DocumentMapping)> {
    debug!(documents = docs.len(), directed, "building base network");

    let copy_names: Vec<String> = match &options.node_attrs {
        Some(names) => names.clone(),
        None => docs.column_names(),
    };

    let mut network = Network::new(directed);
    let mut mapping = DocumentMapping::new();

    for (i, doc) in docs.iter().enumerate() {
        let mut node = NetworkNode::new(doc.title.clone());
        for name in &copy_names {
            if let Some(value) = doc.attr(name) {
                node.attrs.insert(name.clone(), value.clone());
            }
        }
        network.add_node(node);
        mapping.add(doc.id.clone(), i);
    }

    if let Some(spec) = &options.colors {
        if docs.is_empty() {
            warn!("color specification ignored for an empty document set");
        } else {
            let values: Vec<AttrValue> = match spec {
                ColorSpec::Column(name) => docs
                    .column(name)
                    .ok_or_else(|| BuildError::UnknownColumn(name.clone()))?,
                ColorSpec::Values(values) => values.clone(),
            };

            if values.len() != docs.len() {
                return Err(BuildError::ColorLengthMismatch {
                    expected: docs.len(),
                    actual: values.len(),
                });
            }

            let colors = assign_colors(&values, options.palette.as_ref());
            for (node, color) in network.nodes.iter_mut().zip(colors) {
                node.color = Some(color);
            }
        }
    }

    Ok((network, mapping))
}

/// Map per-document values onto colors.
///
/// All-float sequences are min-max normalized into the continuous
/// gradient. Everything else is categorical: each distinct value, in
/// ascending order, takes the next palette color. Integers are
/// deliberately categorical so that e.g. publication years form discrete
/// groups.
fn assign_colors(values: &[AttrValue], palette: Option<&Palette>) -> Vec<Color> {
    let all_float = values.iter().all(|v| matches!(v, AttrValue::Float(_)));

    if all_float {
        let gradient = match palette {
            Some(Palette::Continuous(gradient)) => gradient.clone(),
            _ => Gradient::viridis(),
        };
        let numbers: Vec<f64> = values.iter().filter_map(AttrValue::as_float).collect();
        return min_max_normalize(&numbers)
            .into_iter()
            .map(|t| gradient.sample(t))
            .collect();
    }

    let discrete = match palette {
        Some(Palette::Discrete(palette)) => palette.clone(),
        _ => DiscretePalette::qualitative(),
    };

    let mut distinct: Vec<AttrValue> = values.to_vec();
    distinct.sort_by(AttrValue::cmp_order);
    distinct.dedup_by(|a, b| a.cmp_order(b) == Ordering::Equal);

    values
        .iter()
        .map(|value| {
            let group = distinct
                .iter()
                .position(|d| d.cmp_order(value) == Ordering::Equal)
                .unwrap_or(0);
            discrete.color(group)
        })
        .collect()
}

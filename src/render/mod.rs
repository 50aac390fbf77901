//! Interactive HTML rendering for bibliographic networks
//!
//! The artifact is a single self-contained page: node positions are computed
//! ahead of time by `bibnet_layout` and embedded alongside the vis-network
//! widget configuration, so opening the file needs nothing but a browser.

mod component;
mod html;
mod options;
mod plot;

pub use bibnet_layout::{Algorithm, LayoutConfig};
pub use html::{
    render_network, render_to_html, RenderError, RenderResult, RenderSummary, DEFAULT_OUTPUT,
};
pub use options::RenderOptions;
pub use plot::{
    plot_citation_network, plot_coauthor_network, plot_cocitation_network,
    plot_coupling_network, PlotError, PlotResult,
};

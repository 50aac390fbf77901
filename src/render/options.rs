//! Render configuration

use bibnet_layout::LayoutConfig;

/// Options for the interactive network artifact
///
/// `smooth_edges = None` decides automatically: curved edges look nice but
/// are heavy on performance, so they are enabled only below 1000 edges.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// CSS height of the canvas
    pub height: String,
    /// Curved edges; `None` picks based on edge count
    pub smooth_edges: Option<bool>,
    /// Radius of the largest node
    pub max_node_size: f64,
    /// Radius of the smallest node
    pub min_node_size: f64,
    /// Only draw the largest connected component
    pub largest_component: bool,
    /// Run the widget physics simulation
    pub interactive: bool,
    /// Show the widget configuration pane
    pub controls: bool,
    /// Multiplier applied to layout positions
    pub scale: f64,
    /// Force-directed layout tuning
    pub layout: LayoutConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            height: "1000px".to_string(),
            smooth_edges: None,
            max_node_size: 100.0,
            min_node_size: 5.0,
            largest_component: true,
            interactive: true,
            controls: false,
            scale: 1.0,
            layout: LayoutConfig::default(),
        }
    }
}

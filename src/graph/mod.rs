//! Core network data model
//!
//! This module implements the shared model the builders produce:
//! - Tagged scalar attribute values and ordered attribute bags
//! - The identity mapping from external ids to dense node indices
//! - The built network (nodes with attributes, optionally weighted edges)

pub mod attr;
pub mod mapping;
pub mod network;

// Re-export main types
pub use attr::{AttrMap, AttrValue};
pub use mapping::DocumentMapping;
pub use network::{Network, NetworkEdge, NetworkNode};

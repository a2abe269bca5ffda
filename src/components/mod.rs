//! UI components.

pub mod effect_graph;
pub mod sidebar;

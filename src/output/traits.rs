//! Output capability traits.

/// Renders results and failures, delivers payloads.
pub mod output_boundary;

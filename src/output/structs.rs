//! Output data structures.

/// Opaque rendered payload.
pub mod rendered_result;

/// Plain-text boundary printing to stdout.
pub mod console_output;

//! Implementation blocks for output types.

/// RenderedResult constructors and Display.
pub mod rendered_result;

/// ConsoleOutput rendering and delivery.
pub mod console_output;

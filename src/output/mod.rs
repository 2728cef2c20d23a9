//! Output boundary.
//!
//! Rendering and delivery live outside the engine. The dispatcher only sees
//! the `OutputBoundary` trait: it hands over a numeric or ranked result (or a
//! failure) and gets back an opaque `RenderedResult`, which it delivers and,
//! on request, stores in the share cache.
//!
//! `ConsoleOutput` is the plain-text boundary used by the binary.

/// Rendered payload and the console boundary.
pub mod structs;

/// Rendering and delivery capability.
pub mod traits;

/// Implementation blocks for output types.
pub mod impls;

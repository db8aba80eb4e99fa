//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order and are used by
//! [`render_sequence`](crate::render_sequence).

/// Generic frame sink trait and built-in sinks.
pub mod sink;

//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns, currently trace
//! identifier propagation and request logging.

pub mod trace;

pub use trace::Trace;

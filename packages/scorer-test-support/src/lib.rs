//! Test support utilities for the scorer workspace.
//!
//! Currently this only hosts the shared tracing initialization used by the
//! engine's unit and property tests.

pub mod logging;

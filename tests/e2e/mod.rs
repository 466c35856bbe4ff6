//! End-to-end tests against real temporary git repositories
//!
//! Every test builds its own repository and stores under a `TempDir`; the
//! real home directory is never touched.

pub mod helpers;
pub mod prune;
pub mod remove;
pub mod sessions;

pub use helpers::*;

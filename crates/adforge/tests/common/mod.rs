//! Shared test utilities for adforge integration tests.
//!
//! This module provides:
//! - `ConfigBuilder` for creating generation configs programmatically
//! - `ScriptedModel` that answers prompts by substring without any network access
//! - `TestHarness` for runs that read and write real files in a temp directory

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::*;

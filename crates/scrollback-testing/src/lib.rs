//! Testing infrastructure for scrollback integration tests.
//!
//! Provides `StorageFixture`, a fluent builder that lays out a synthetic
//! session store (session/message/part JSON files) in a temp directory,
//! matching the layout written by the external session runner.

pub mod fixtures;

pub use fixtures::StorageFixture;

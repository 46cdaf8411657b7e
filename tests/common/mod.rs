//! Common test utilities shared across test types
//!
//! - `mocks.rs` - Scripted implementations of the port traits

pub mod mocks;

//! Core guardian logic
//!
//! This module performs no I/O of its own. HTTP, the issue tracker and report
//! storage are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (AliasConfig, HealthState, DeadManState, GuardianReport)
//! - `services/` - Candidate generation, resolution, probing, remediation, the pass loop
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;

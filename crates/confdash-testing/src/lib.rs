//! Testing infrastructure for confdash integration tests.
//!
//! This crate provides utilities for writing integration tests:
//! - `TestWorld`: Fluent interface for seeding an isolated store
//! - `fixtures`: Ready-made catalogs used across crates

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

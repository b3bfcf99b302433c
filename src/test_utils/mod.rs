//! Shared test utilities for the records exporter.
//!
//! Configuration builders, record fixtures and mock page sources / servers
//! used by the unit tests across the crate.

#![cfg(test)]

pub mod config;
pub mod fixtures;

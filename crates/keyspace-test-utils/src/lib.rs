//! Shared test utilities for the keyspace workspace.
//!
//! This crate provides standard fixtures so crate test suites do not each
//! rebuild the same trees and stores. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`fixtures`]: sample document trees and the four-key sample store
//! - [`logging`]: a tracing subscriber that writes through the test harness

pub mod fixtures;
pub mod logging;

//! Live data sources for the SwiftRide planner.
//!
//! Responsibilities:
//! - Provide network-backed implementations of the core source traits.
//! - Encapsulate wire formats of external services.
//!
//! Boundaries:
//! - Do not encode planning rules (live in `swiftride-core`).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - Thread-safe by default where feasible.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod transit;

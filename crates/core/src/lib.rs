//! tliconnect_core - Functional core for TLI Connect course scheduling.
//!
//! Everything in this crate is pure: no I/O, no clocks, no shared state.
//! Callers own persistence of whatever it produces.

pub mod schedule;
pub mod serde;

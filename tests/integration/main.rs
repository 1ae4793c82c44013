// tests/integration/main.rs
//! Integration tests for the curve engine, run against the public API only.

mod group_laws;
mod order_experiment;

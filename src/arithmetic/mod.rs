// src/arithmetic/mod.rs
//! Prime field arithmetic.

pub mod fp;

pub use fp::{inverse_mod, normalize};

//! Core data model for varank.
//!
//! This crate holds the plain data types shared by the evidence and scoring
//! crates: genomic variants and their consequence types, per-variant analysis
//! state, frequency and pathogenicity evidence, genes, pedigrees and modes of
//! inheritance. Higher-level crates (`varank-evidence`, `varank-scoring`)
//! operate on these types but should not extend them.

pub mod errors;
pub mod models;

// re-exports
pub use errors::ModelError;

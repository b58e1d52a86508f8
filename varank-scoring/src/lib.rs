//! Gene scoring engine for varank.
//!
//! Given a gene's filtered variants, a mode of inheritance and a pedigree,
//! the [`GeneScorer`] decides which variants count towards the gene's score,
//! aggregates them into a variant score, combines that with the externally
//! supplied priority score, and ranks genes deterministically.
//!
//! Scoring is CPU-bound and embarrassingly parallel across genes: each pass
//! reads only that gene's variants plus the shared immutable pedigree, so
//! batches are scored with one rayon task per gene and merged by a final
//! sort.

pub mod inheritance;
pub mod scorer;

// re-exports
pub use scorer::{GeneScorer, ScoringError};

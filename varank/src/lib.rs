//! Umbrella crate for the varank toolkit.
//!
//! Each member crate sits behind a feature of the same name, so downstream
//! users pull in only the pieces they need:
//!
//! - `core`: the shared data model (variants, evidence, genes, pedigrees);
//! - `evidence`: indexed score stores, evidence aggregation and filters;
//! - `scoring`: inheritance-aware gene scoring and ranking.

#[cfg(feature = "core")]
#[doc(inline)]
pub use varank_core as core;

#[cfg(feature = "evidence")]
#[doc(inline)]
pub use varank_evidence as evidence;

#[cfg(feature = "scoring")]
#[doc(inline)]
pub use varank_scoring as scoring;

//! Evidence retrieval and filtering for varank.
//!
//! This crate covers three concerns:
//!
//! - the [`ScoreStore`]: an indexed range lookup over sorted, per-base
//!   pathogenicity score files, with per-source adapters ([`CaddScores`],
//!   [`RemmScores`]) that know which effect types their source applies to;
//! - the [`VariantDataService`]: merges frequency and pathogenicity evidence
//!   from the configured sources into one result per variant, routing on the
//!   variant's consequence type and filtering to the requested sources;
//! - the [`VariantFilter`] capability plus the [`EvidenceDataProvider`]
//!   decorator, which fetches evidence lazily just before a wrapped filter
//!   needs it and amortises one fetch across a whole filter chain.
//!
//! All lookups degrade to "no evidence" on I/O failure; a scoring run never
//! aborts because annotation is missing for an individual variant.

pub mod cache;
pub mod filters;
pub mod service;
pub mod store;
pub mod traits;

// re-exports
pub use cache::EvidenceCache;
pub use filters::{
    EvidenceDataProvider, FilterError, FrequencyFilter, PathogenicityFilter, VariantFilter,
};
pub use service::{DEFAULT_PATHOGENICITY_SOURCES, VariantDataService};
pub use store::{CaddScores, RemmScores, ScoreStore, query_interval};
pub use traits::{PathogenicityStore, VariantData, VariantStore};

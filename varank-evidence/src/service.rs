use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use varank_core::models::{
    Frequency, FrequencyData, FrequencySource, PathogenicityData, PathogenicityScore,
    PathogenicitySource, Variant,
};

use crate::traits::{PathogenicityStore, VariantData, VariantStore};

/// The fixed superset of pathogenicity sources fetched by the lazy evidence
/// provider, so that later filters sharing a pipeline never refetch.
pub const DEFAULT_PATHOGENICITY_SOURCES: [PathogenicitySource; 5] = [
    PathogenicitySource::Sift,
    PathogenicitySource::Polyphen,
    PathogenicitySource::MutationTaster,
    PathogenicitySource::Remm,
    PathogenicitySource::Cadd,
];

/// Merges evidence from the configured sources into one de-duplicated-by-source
/// result per variant.
///
/// Routing is effect-type driven and deliberately kept as explicit in-order
/// branching in [`gather_pathogenicity`](VariantDataService), so the rules
/// stay auditable in one place:
///
/// 1. missense-like variants take the missense-trained bundle served by the
///    default variant store;
/// 2. otherwise, if REMM is requested and the variant is non-coding, REMM is
///    queried (it outperforms general-purpose scores there);
/// 3. if CADD is requested it is queried unconditionally, in addition to the
///    above; callers are responsible for not double counting incompatible
///    combinations.
///
/// Downstream, only scores from the originally requested sources are
/// retained.
pub struct VariantDataService {
    variant_store: Arc<dyn VariantStore>,
    remm: Arc<dyn PathogenicityStore>,
    cadd: Arc<dyn PathogenicityStore>,
}

impl VariantDataService {
    pub fn new(
        variant_store: Arc<dyn VariantStore>,
        remm: Arc<dyn PathogenicityStore>,
        cadd: Arc<dyn PathogenicityStore>,
    ) -> Self {
        VariantDataService {
            variant_store,
            remm,
            cadd,
        }
    }

    /// Frequency and pathogenicity evidence for `variant`, filtered to
    /// exactly the requested sources.
    pub fn variant_data(
        &self,
        variant: &Variant,
        frequency_sources: &HashSet<FrequencySource>,
        pathogenicity_sources: &HashSet<PathogenicitySource>,
    ) -> VariantData {
        let base = self.variant_store.variant_data(variant);

        let gathered = self.gather_pathogenicity(variant, &base, pathogenicity_sources);
        let pathogenicity = retain_pathogenicity_sources(gathered, pathogenicity_sources);
        let frequency = retain_frequency_sources(&base.frequency, frequency_sources);

        debug!(
            "{}: {} frequency entries, {} pathogenicity scores after source filtering",
            variant,
            frequency.known_frequencies().len(),
            pathogenicity.scores().len()
        );
        VariantData {
            frequency,
            pathogenicity,
        }
    }

    /// Frequency evidence only, filtered to the requested sources.
    pub fn frequency_data(
        &self,
        variant: &Variant,
        frequency_sources: &HashSet<FrequencySource>,
    ) -> FrequencyData {
        let base = self.variant_store.variant_data(variant);
        retain_frequency_sources(&base.frequency, frequency_sources)
    }

    /// Pathogenicity evidence only. An empty requested-source set
    /// short-circuits to the EMPTY sentinel without touching any source.
    pub fn pathogenicity_data(
        &self,
        variant: &Variant,
        pathogenicity_sources: &HashSet<PathogenicitySource>,
    ) -> PathogenicityData {
        if pathogenicity_sources.is_empty() {
            return PathogenicityData::EMPTY;
        }

        let mut gathered: Vec<PathogenicityScore> = Vec::new();
        if variant.effect().is_missense() {
            let base = self.variant_store.variant_data(variant);
            gathered.extend(base.pathogenicity.scores().iter().copied());
        } else if pathogenicity_sources.contains(&PathogenicitySource::Remm)
            && variant.is_non_coding()
        {
            gathered.extend(self.remm.pathogenicity_data(variant).scores().iter().copied());
        }
        if pathogenicity_sources.contains(&PathogenicitySource::Cadd) {
            gathered.extend(self.cadd.pathogenicity_data(variant).scores().iter().copied());
        }

        retain_pathogenicity_sources(gathered, pathogenicity_sources)
    }

    fn gather_pathogenicity(
        &self,
        variant: &Variant,
        base: &VariantData,
        pathogenicity_sources: &HashSet<PathogenicitySource>,
    ) -> Vec<PathogenicityScore> {
        let mut gathered: Vec<PathogenicityScore> = Vec::new();
        if variant.effect().is_missense() {
            gathered.extend(base.pathogenicity.scores().iter().copied());
        } else if pathogenicity_sources.contains(&PathogenicitySource::Remm)
            && variant.is_non_coding()
        {
            gathered.extend(self.remm.pathogenicity_data(variant).scores().iter().copied());
        }
        if pathogenicity_sources.contains(&PathogenicitySource::Cadd) {
            gathered.extend(self.cadd.pathogenicity_data(variant).scores().iter().copied());
        }
        gathered
    }
}

/// Set-intersection with the requested sources; nothing left means the
/// distinguished EMPTY value, not an empty set wrapped some other way.
fn retain_pathogenicity_sources(
    scores: Vec<PathogenicityScore>,
    wanted: &HashSet<PathogenicitySource>,
) -> PathogenicityData {
    let kept: Vec<PathogenicityScore> = scores
        .into_iter()
        .filter(|score| wanted.contains(&score.source()))
        .collect();
    if kept.is_empty() {
        return PathogenicityData::EMPTY;
    }
    PathogenicityData::new(kept)
}

/// Retain requested frequency sources. An rsID alone is still meaningful and
/// is preserved even with zero frequency entries.
fn retain_frequency_sources(
    data: &FrequencyData,
    wanted: &HashSet<FrequencySource>,
) -> FrequencyData {
    let kept: Vec<Frequency> = data
        .known_frequencies()
        .iter()
        .filter(|frequency| wanted.contains(&frequency.source()))
        .copied()
        .collect();
    if data.rs_id().is_none() && kept.is_empty() {
        return FrequencyData::EMPTY;
    }
    FrequencyData::new(data.rs_id(), kept)
}

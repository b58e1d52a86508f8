use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use varank_core::models::{
    FilterResult, FilterType, FrequencySource, PathogenicitySource, VariantEvaluation,
};

use crate::service::{DEFAULT_PATHOGENICITY_SOURCES, VariantDataService};

/// Missense variants with a best prediction at or above this are considered
/// pathogenic by the default pathogenicity filter.
const DEFAULT_PATHOGENICITY_THRESHOLD: f32 = 0.5;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Frequency cutoff must be a percentage in (0, 100], got: {0}")]
    InvalidFrequencyCutoff(f32),
}

/// The filter capability: evaluate a variant to a pass/fail outcome.
///
/// `run` records the outcome on the variant and is what pipelines call;
/// data-providing wrappers override it to attach evidence first.
pub trait VariantFilter: Send + Sync {
    fn filter_type(&self) -> FilterType;

    fn evaluate(&self, variant: &VariantEvaluation) -> FilterResult;

    fn run(&self, variant: &mut VariantEvaluation) -> FilterResult {
        let result = self.evaluate(variant);
        variant.add_filter_result(result);
        result
    }
}

/// Fails variants seen in the population above a frequency cutoff: common
/// variants are unlikely causes of a rare disease.
pub struct FrequencyFilter {
    max_percent: f32,
}

impl FrequencyFilter {
    pub fn new(max_percent: f32) -> Result<Self, FilterError> {
        if !(max_percent > 0.0 && max_percent <= 100.0) {
            return Err(FilterError::InvalidFrequencyCutoff(max_percent));
        }
        Ok(FrequencyFilter { max_percent })
    }
}

impl VariantFilter for FrequencyFilter {
    fn filter_type(&self) -> FilterType {
        FilterType::Frequency
    }

    fn evaluate(&self, variant: &VariantEvaluation) -> FilterResult {
        // no known frequency is a pass: unseen variants are the interesting ones
        let above_cutoff = variant
            .frequency_data()
            .max_frequency()
            .is_some_and(|best| best > self.max_percent);
        if above_cutoff {
            FilterResult::fail(FilterType::Frequency)
        } else {
            FilterResult::pass(FilterType::Frequency)
        }
    }
}

/// Fails missense variants that every predictor considers benign. Truncating
/// and other non-missense coding changes pass outright; set
/// `keep_non_pathogenic` to disable filtering altogether and keep the scores
/// for reporting.
pub struct PathogenicityFilter {
    keep_non_pathogenic: bool,
}

impl PathogenicityFilter {
    pub fn new(keep_non_pathogenic: bool) -> Self {
        PathogenicityFilter {
            keep_non_pathogenic,
        }
    }
}

impl VariantFilter for PathogenicityFilter {
    fn filter_type(&self) -> FilterType {
        FilterType::Pathogenicity
    }

    fn evaluate(&self, variant: &VariantEvaluation) -> FilterResult {
        if self.keep_non_pathogenic || !variant.effect().is_missense() {
            return FilterResult::pass(FilterType::Pathogenicity);
        }
        let pathogenic = variant
            .pathogenicity_data()
            .max_score()
            .is_some_and(|best| best >= DEFAULT_PATHOGENICITY_THRESHOLD);
        if pathogenic {
            FilterResult::pass(FilterType::Pathogenicity)
        } else {
            FilterResult::fail(FilterType::Pathogenicity)
        }
    }
}

/// Decorator that attaches evidence to a variant just before the wrapped
/// filter needs it.
///
/// The guard is a presence check on frequency entries only: if the variant
/// already carries any, nothing is fetched. Pathogenicity-only filters lean
/// on the same guard, because the single fetch always requests both kinds of
/// evidence (pathogenicity as the [`DEFAULT_PATHOGENICITY_SOURCES`] superset)
/// and so one fetch serves an arbitrary chain of decorated filters.
pub struct EvidenceDataProvider {
    service: Arc<VariantDataService>,
    frequency_sources: HashSet<FrequencySource>,
    pathogenicity_sources: HashSet<PathogenicitySource>,
    inner: Box<dyn VariantFilter>,
}

impl EvidenceDataProvider {
    pub fn new(
        service: Arc<VariantDataService>,
        frequency_sources: HashSet<FrequencySource>,
        inner: Box<dyn VariantFilter>,
    ) -> Self {
        EvidenceDataProvider {
            service,
            frequency_sources,
            pathogenicity_sources: DEFAULT_PATHOGENICITY_SOURCES.into_iter().collect(),
            inner,
        }
    }

    fn provide_evidence(&self, variant: &mut VariantEvaluation) {
        if variant.frequency_data().has_known_frequency() {
            return;
        }
        debug!("Fetching evidence for {}", variant.variant());
        let data = self.service.variant_data(
            variant.variant(),
            &self.frequency_sources,
            &self.pathogenicity_sources,
        );
        variant.set_frequency_data(data.frequency);
        variant.set_pathogenicity_data(data.pathogenicity);
    }
}

impl VariantFilter for EvidenceDataProvider {
    fn filter_type(&self) -> FilterType {
        self.inner.filter_type()
    }

    fn evaluate(&self, variant: &VariantEvaluation) -> FilterResult {
        self.inner.evaluate(variant)
    }

    fn run(&self, variant: &mut VariantEvaluation) -> FilterResult {
        self.provide_evidence(variant);
        self.inner.run(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use varank_core::models::{
        Frequency, FrequencyData, PathogenicityData, PathogenicityScore, PathogenicitySource,
        Variant, VariantEffect,
    };

    use crate::traits::{PathogenicityStore, VariantData, VariantStore};

    struct CountingVariantStore {
        data: VariantData,
        calls: Arc<AtomicUsize>,
    }

    impl VariantStore for CountingVariantStore {
        fn variant_data(&self, _variant: &Variant) -> VariantData {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.data.clone()
        }
    }

    struct EmptyPathStore;

    impl PathogenicityStore for EmptyPathStore {
        fn pathogenicity_data(&self, _variant: &Variant) -> PathogenicityData {
            PathogenicityData::EMPTY
        }
    }

    fn counting_service(frequency_percent: f32) -> (Arc<VariantDataService>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let store = CountingVariantStore {
            data: VariantData {
                frequency: FrequencyData::new(
                    None,
                    vec![Frequency::new(FrequencySource::ThousandGenomes, frequency_percent).unwrap()],
                ),
                pathogenicity: PathogenicityData::new(vec![PathogenicityScore::new(
                    PathogenicitySource::Sift,
                    0.9,
                )]),
            },
            calls: calls.clone(),
        };
        let service = Arc::new(VariantDataService::new(
            Arc::new(store),
            Arc::new(EmptyPathStore),
            Arc::new(EmptyPathStore),
        ));
        (service, calls)
    }

    fn missense_evaluation() -> VariantEvaluation {
        VariantEvaluation::builder("1", 100, "A", "T")
            .effect(VariantEffect::MissenseVariant)
            .build()
    }

    #[rstest]
    #[case(-1.0)]
    #[case(0.0)]
    #[case(100.1)]
    fn test_frequency_cutoff_validated_at_construction(#[case] cutoff: f32) {
        assert!(FrequencyFilter::new(cutoff).is_err());
    }

    #[rstest]
    fn test_frequency_filter_passes_unseen_variants() {
        let filter = FrequencyFilter::new(1.0).unwrap();
        let mut variant = missense_evaluation();
        let result = filter.run(&mut variant);
        assert!(result.passed());
        assert!(variant.passed_filters());
    }

    #[rstest]
    fn test_frequency_filter_fails_common_variants() {
        let filter = FrequencyFilter::new(1.0).unwrap();
        let mut variant = missense_evaluation();
        variant.set_frequency_data(FrequencyData::new(
            None,
            vec![Frequency::new(FrequencySource::ThousandGenomes, 5.0).unwrap()],
        ));
        let result = filter.run(&mut variant);
        assert!(!result.passed());
        assert!(!variant.passed_filters());
    }

    #[rstest]
    fn test_pathogenicity_filter_passes_truncating_variants() {
        let filter = PathogenicityFilter::new(false);
        let variant = VariantEvaluation::builder("1", 100, "A", "")
            .effect(VariantEffect::FrameshiftVariant)
            .build();
        assert!(filter.evaluate(&variant).passed());
    }

    #[rstest]
    fn test_pathogenicity_filter_fails_benign_missense() {
        let filter = PathogenicityFilter::new(false);
        let mut variant = missense_evaluation();
        variant.set_pathogenicity_data(PathogenicityData::new(vec![PathogenicityScore::new(
            PathogenicitySource::Sift,
            0.1,
        )]));
        assert!(!filter.evaluate(&variant).passed());

        let keep_all = PathogenicityFilter::new(true);
        assert!(keep_all.evaluate(&variant).passed());
    }

    #[rstest]
    fn test_provider_attaches_both_kinds_of_evidence() {
        let (service, calls) = counting_service(0.1);
        let provider = EvidenceDataProvider::new(
            service,
            HashSet::from([FrequencySource::ThousandGenomes]),
            Box::new(FrequencyFilter::new(1.0).unwrap()),
        );

        let mut variant = missense_evaluation();
        let result = provider.run(&mut variant);

        assert!(result.passed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(variant.frequency_data().has_known_frequency());
        // the triggering filter only needed frequencies, but both were attached
        assert!(!variant.pathogenicity_data().is_empty());
    }

    #[rstest]
    fn test_one_fetch_amortised_across_a_filter_chain() {
        let (service, calls) = counting_service(0.1);
        let frequency_sources = HashSet::from([FrequencySource::ThousandGenomes]);

        let first = EvidenceDataProvider::new(
            service.clone(),
            frequency_sources.clone(),
            Box::new(FrequencyFilter::new(1.0).unwrap()),
        );
        let second = EvidenceDataProvider::new(
            service,
            frequency_sources,
            Box::new(PathogenicityFilter::new(false)),
        );

        let mut variant = missense_evaluation();
        first.run(&mut variant);
        second.run(&mut variant);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(variant.passed_filters());
    }
}

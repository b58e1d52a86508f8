//! End-to-end exercise of the analysis pipeline: evidence is fetched lazily
//! through a decorated filter chain, variants are filtered, and the surviving
//! evaluations are aggregated into ranked genes.

use std::collections::HashSet;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use varank_core::models::{
    Frequency, FrequencyData, FrequencySource, Gene, ModeOfInheritance, PathogenicityData,
    PathogenicityScore, PathogenicitySource, Pedigree, PriorityResult, PriorityType, Variant,
    VariantEffect, VariantEvaluation,
};
use varank_evidence::{
    CaddScores, EvidenceDataProvider, FrequencyFilter, PathogenicityFilter, RemmScores,
    VariantData, VariantDataService, VariantFilter, VariantStore,
};
use varank_scoring::GeneScorer;

/// In-memory variant store standing in for the external evidence database.
struct FixtureStore;

impl VariantStore for FixtureStore {
    fn variant_data(&self, variant: &Variant) -> VariantData {
        match variant.position() {
            // rare damaging missense
            100 => VariantData {
                frequency: FrequencyData::new(
                    Some(111),
                    vec![Frequency::new(FrequencySource::ThousandGenomes, 0.01).unwrap()],
                ),
                pathogenicity: PathogenicityData::new(vec![
                    PathogenicityScore::new(PathogenicitySource::Sift, 0.9),
                    PathogenicityScore::new(PathogenicitySource::Polyphen, 0.95),
                ]),
            },
            // common benign missense, should be filtered on frequency
            200 => VariantData {
                frequency: FrequencyData::new(
                    Some(222),
                    vec![Frequency::new(FrequencySource::ThousandGenomes, 12.5).unwrap()],
                ),
                pathogenicity: PathogenicityData::new(vec![PathogenicityScore::new(
                    PathogenicitySource::Sift,
                    0.2,
                )]),
            },
            _ => VariantData::default(),
        }
    }
}

fn filter_chain() -> Vec<EvidenceDataProvider> {
    let service = Arc::new(VariantDataService::new(
        Arc::new(FixtureStore),
        // no score files present: non-missense lookups degrade to no evidence
        Arc::new(RemmScores::open("/nonexistent/remm.tsv.gz")),
        Arc::new(CaddScores::open("/nonexistent/cadd.tsv.gz")),
    ));
    let frequency_sources = HashSet::from([FrequencySource::ThousandGenomes]);

    vec![
        EvidenceDataProvider::new(
            service.clone(),
            frequency_sources.clone(),
            Box::new(FrequencyFilter::new(1.0).unwrap()),
        ),
        EvidenceDataProvider::new(
            service,
            frequency_sources,
            Box::new(PathogenicityFilter::new(false)),
        ),
    ]
}

fn evaluation(position: u32, score: f32) -> VariantEvaluation {
    VariantEvaluation::builder("1", position, "A", "T")
        .effect(VariantEffect::MissenseVariant)
        .variant_score(score)
        .build()
}

#[rstest]
fn test_filter_fetch_score_rank_round_trip() {
    let chain = filter_chain();

    let mut rare = evaluation(100, 0.92);
    let mut common = evaluation(200, 0.4);
    for filter in &chain {
        filter.run(&mut rare);
        filter.run(&mut common);
    }

    assert!(rare.passed_filters());
    assert!(!common.passed_filters());
    // evidence was attached on the way through
    assert_eq!(rare.frequency_data().rs_id(), Some(111));
    assert_eq!(rare.pathogenicity_data().max_score(), Some(0.95));

    let mut strong = Gene::new("STRONG", 1);
    strong.add_variant(rare);
    strong.add_priority_result(PriorityResult::new(PriorityType::HiPhive, 0.8));

    let mut weak = Gene::new("WEAK", 2);
    weak.add_variant(common);
    weak.add_priority_result(PriorityResult::new(PriorityType::HiPhive, 0.9));

    let scorer = GeneScorer::new(
        0,
        ModeOfInheritance::AutosomalDominant,
        Pedigree::single_sample("sample"),
    )
    .unwrap();

    let mut genes = vec![weak, strong];
    scorer.score_genes(&mut genes);

    assert_eq!(genes[0].symbol(), "STRONG");
    assert_eq!(genes[0].variant_score(), 0.92);
    assert_eq!(genes[0].combined_score(), (0.92 + 0.8) / 2.0);
    assert!(genes[0].variants()[0].contributes_to_gene_score());

    // WEAK's only variant failed the frequency filter, so only its priority
    // evidence remains
    assert_eq!(genes[1].symbol(), "WEAK");
    assert_eq!(genes[1].variant_score(), 0.0);
    assert_eq!(genes[1].combined_score(), 0.45);
}

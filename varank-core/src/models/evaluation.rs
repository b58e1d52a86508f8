use std::collections::HashMap;

use crate::models::frequency::FrequencyData;
use crate::models::pathogenicity::PathogenicityData;
use crate::models::variant::{Variant, VariantEffect};

/// Identifier of a filter in the analysis pipeline. A variant carries at most
/// one outcome per filter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    Frequency,
    Pathogenicity,
    Quality,
    Interval,
}

/// Pass/fail outcome of one filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterResult {
    filter_type: FilterType,
    passed: bool,
}

impl FilterResult {
    pub fn pass(filter_type: FilterType) -> Self {
        FilterResult {
            filter_type,
            passed: true,
        }
    }

    pub fn fail(filter_type: FilterType) -> Self {
        FilterResult {
            filter_type,
            passed: false,
        }
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// An observed per-sample genotype call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeCall {
    HomRef,
    Het,
    HomAlt,
    NoCall,
}

/// A [`Variant`] plus its mutable analysis state: filter outcomes, attached
/// evidence, genotype calls and the score bookkeeping used by gene scoring.
///
/// Evidence fields start as the shared EMPTY sentinels and are replaced
/// wholesale by the evidence provider, never mutated field-by-field. The
/// contributes-to-gene-score flag is written only by the scoring engine.
#[derive(Debug, Clone)]
pub struct VariantEvaluation {
    variant: Variant,
    filter_results: HashMap<FilterType, FilterResult>,
    frequency_data: FrequencyData,
    pathogenicity_data: PathogenicityData,
    /// Genotype calls aligned with pedigree member order; empty when the
    /// caller supplied no genotype detail.
    genotypes: Vec<GenotypeCall>,
    variant_score: f32,
    contributes_to_gene_score: bool,
}

impl VariantEvaluation {
    pub fn builder(
        chrom: impl Into<String>,
        position: u32,
        reference: impl Into<String>,
        alternate: impl Into<String>,
    ) -> VariantEvaluationBuilder {
        VariantEvaluationBuilder {
            chrom: chrom.into(),
            position,
            reference: reference.into(),
            alternate: alternate.into(),
            effect: VariantEffect::SequenceVariant,
            filter_results: Vec::new(),
            genotypes: Vec::new(),
            variant_score: 0.0,
        }
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn effect(&self) -> VariantEffect {
        self.variant.effect()
    }

    /// Record a filter outcome. One outcome per filter type, last write wins;
    /// filters are not re-run, so a recorded fail is never erased in practice.
    pub fn add_filter_result(&mut self, result: FilterResult) {
        self.filter_results.insert(result.filter_type(), result);
    }

    pub fn filter_result(&self, filter_type: FilterType) -> Option<FilterResult> {
        self.filter_results.get(&filter_type).copied()
    }

    /// True when no recorded outcome is a fail. A variant with no outcomes at
    /// all has passed by definition.
    pub fn passed_filters(&self) -> bool {
        self.filter_results.values().all(FilterResult::passed)
    }

    pub fn frequency_data(&self) -> &FrequencyData {
        &self.frequency_data
    }

    pub fn set_frequency_data(&mut self, frequency_data: FrequencyData) {
        self.frequency_data = frequency_data;
    }

    pub fn pathogenicity_data(&self) -> &PathogenicityData {
        &self.pathogenicity_data
    }

    pub fn set_pathogenicity_data(&mut self, pathogenicity_data: PathogenicityData) {
        self.pathogenicity_data = pathogenicity_data;
    }

    /// The genotype call for the given pedigree sample index, if genotyped.
    pub fn genotype(&self, sample_id: usize) -> Option<GenotypeCall> {
        self.genotypes.get(sample_id).copied()
    }

    pub fn variant_score(&self) -> f32 {
        self.variant_score
    }

    pub fn contributes_to_gene_score(&self) -> bool {
        self.contributes_to_gene_score
    }

    pub fn set_contributes_to_gene_score(&mut self, contributes: bool) {
        self.contributes_to_gene_score = contributes;
    }
}

/// Builder for [`VariantEvaluation`], mirroring how the upstream annotation
/// step assembles evaluations before they enter the pipeline.
pub struct VariantEvaluationBuilder {
    chrom: String,
    position: u32,
    reference: String,
    alternate: String,
    effect: VariantEffect,
    filter_results: Vec<FilterResult>,
    genotypes: Vec<GenotypeCall>,
    variant_score: f32,
}

impl VariantEvaluationBuilder {
    pub fn effect(mut self, effect: VariantEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn filter_results(mut self, results: impl IntoIterator<Item = FilterResult>) -> Self {
        self.filter_results.extend(results);
        self
    }

    pub fn genotypes(mut self, genotypes: impl IntoIterator<Item = GenotypeCall>) -> Self {
        self.genotypes.extend(genotypes);
        self
    }

    /// The precomputed variant score in [0, 1], supplied by the upstream
    /// annotation step.
    pub fn variant_score(mut self, variant_score: f32) -> Self {
        self.variant_score = variant_score;
        self
    }

    pub fn build(self) -> VariantEvaluation {
        let mut evaluation = VariantEvaluation {
            variant: Variant::new(
                self.chrom,
                self.position,
                self.reference,
                self.alternate,
                self.effect,
            ),
            filter_results: HashMap::new(),
            frequency_data: FrequencyData::EMPTY,
            pathogenicity_data: PathogenicityData::EMPTY,
            genotypes: self.genotypes,
            variant_score: self.variant_score,
            contributes_to_gene_score: false,
        };
        for result in self.filter_results {
            evaluation.add_filter_result(result);
        }
        evaluation
    }
}

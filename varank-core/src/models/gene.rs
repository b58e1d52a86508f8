use std::fmt::{self, Display};

use crate::models::evaluation::VariantEvaluation;

/// The prioritisation method that produced a [`PriorityResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityType {
    HiPhive,
    Phenix,
    Omim,
}

/// An externally computed, phenotype-derived relevance score for a gene.
/// varank consumes these but never computes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityResult {
    priority_type: PriorityType,
    score: f32,
}

impl PriorityResult {
    pub fn new(priority_type: PriorityType, score: f32) -> Self {
        PriorityResult {
            priority_type,
            score,
        }
    }

    pub fn priority_type(&self) -> PriorityType {
        self.priority_type
    }

    pub fn score(&self) -> f32 {
        self.score
    }
}

/// Aggregation unit for scoring: all variant evaluations observed within one
/// genomic feature, plus attached priority results and the three derived
/// scores.
///
/// Derived scores default to zero and are recomputed wholesale by each
/// scoring run, never maintained incrementally.
#[derive(Debug, Clone)]
pub struct Gene {
    symbol: String,
    gene_id: u32,
    variants: Vec<VariantEvaluation>,
    priority_results: Vec<PriorityResult>,
    variant_score: f32,
    priority_score: f32,
    combined_score: f32,
}

impl Gene {
    pub fn new(symbol: impl Into<String>, gene_id: u32) -> Self {
        Gene {
            symbol: symbol.into(),
            gene_id,
            variants: Vec::new(),
            priority_results: Vec::new(),
            variant_score: 0.0,
            priority_score: 0.0,
            combined_score: 0.0,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn gene_id(&self) -> u32 {
        self.gene_id
    }

    pub fn add_variant(&mut self, variant: VariantEvaluation) {
        self.variants.push(variant);
    }

    pub fn variants(&self) -> &[VariantEvaluation] {
        &self.variants
    }

    pub fn variants_mut(&mut self) -> &mut [VariantEvaluation] {
        &mut self.variants
    }

    pub fn add_priority_result(&mut self, result: PriorityResult) {
        self.priority_results.push(result);
    }

    pub fn priority_results(&self) -> &[PriorityResult] {
        &self.priority_results
    }

    pub fn variant_score(&self) -> f32 {
        self.variant_score
    }

    pub fn set_variant_score(&mut self, variant_score: f32) {
        self.variant_score = variant_score;
    }

    pub fn priority_score(&self) -> f32 {
        self.priority_score
    }

    pub fn set_priority_score(&mut self, priority_score: f32) {
        self.priority_score = priority_score;
    }

    pub fn combined_score(&self) -> f32 {
        self.combined_score
    }

    pub fn set_combined_score(&mut self, combined_score: f32) {
        self.combined_score = combined_score;
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) variant={:.4} priority={:.4} combined={:.4}",
            self.symbol, self.gene_id, self.variant_score, self.priority_score, self.combined_score
        )
    }
}

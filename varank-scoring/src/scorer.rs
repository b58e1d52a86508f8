use std::cmp::Ordering;

use rayon::prelude::*;
use thiserror::Error;

use varank_core::models::{Gene, ModeOfInheritance, Pedigree, PriorityResult};

use crate::inheritance::recessive_allele_instances;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Sample index {sample_id} is outside the pedigree ({pedigree_size} members)")]
    SampleOutOfPedigree {
        sample_id: usize,
        pedigree_size: usize,
    },
}

/// Scores genes for one sample under one mode of inheritance.
///
/// A scorer holds no per-run state: `score_gene` recomputes all three derived
/// scores from the gene's current variants, so re-running with the same
/// inputs reproduces identical scores.
pub struct GeneScorer {
    sample_id: usize,
    mode: ModeOfInheritance,
    pedigree: Pedigree,
}

impl GeneScorer {
    /// Fails fast when `sample_id` does not address a pedigree member. This
    /// is static configuration, checked before any per-variant work.
    pub fn new(
        sample_id: usize,
        mode: ModeOfInheritance,
        pedigree: Pedigree,
    ) -> Result<Self, ScoringError> {
        if sample_id >= pedigree.len() {
            return Err(ScoringError::SampleOutOfPedigree {
                sample_id,
                pedigree_size: pedigree.len(),
            });
        }
        Ok(GeneScorer {
            sample_id,
            mode,
            pedigree,
        })
    }

    /// Score a single gene in place: decide the contributing variants,
    /// aggregate their scores, and combine with the priority score.
    pub fn score_gene(&self, gene: &mut Gene) {
        for variant in gene.variants_mut() {
            variant.set_contributes_to_gene_score(false);
        }

        let variant_score = match self.mode {
            ModeOfInheritance::AutosomalRecessive | ModeOfInheritance::XRecessive => {
                self.recessive_variant_score(gene)
            }
            _ => self.dominant_variant_score(gene),
        };

        let priority_score = gene
            .priority_results()
            .iter()
            .map(PriorityResult::score)
            .fold(0.0, f32::max);

        gene.set_variant_score(variant_score);
        gene.set_priority_score(priority_score);
        gene.set_combined_score((variant_score + priority_score) / 2.0);
    }

    /// Score all genes and sort them into rank order. Per-gene passes share
    /// no mutable state and run in parallel; the final sort is the only
    /// merge point.
    pub fn score_genes(&self, genes: &mut Vec<Gene>) {
        genes.par_iter_mut().for_each(|gene| self.score_gene(gene));
        genes.sort_by(rank_order);
    }

    /// Dominant-style aggregation: one damaged copy suffices, so the gene
    /// score is the single best passing variant. Ties go to the variant
    /// encountered first.
    fn dominant_variant_score(&self, gene: &mut Gene) -> f32 {
        let mut best: Option<(usize, f32)> = None;
        for (index, variant) in gene.variants().iter().enumerate() {
            if !variant.passed_filters() {
                continue;
            }
            let score = variant.variant_score();
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        match best {
            Some((index, score)) => {
                gene.variants_mut()[index].set_contributes_to_gene_score(true);
                score
            }
            None => 0.0,
        }
    }

    /// Recessive-style aggregation: both copies must be hit. Compatible
    /// variants contribute allele instances (two for a pedigree-compatible
    /// hom-alt call, one for a het), and the gene score is the average of
    /// the two best instances. Fewer than two instances cannot satisfy
    /// recessive inheritance and score zero.
    fn recessive_variant_score(&self, gene: &mut Gene) -> f32 {
        let mut instances: Vec<(usize, f32)> = Vec::new();
        for (index, variant) in gene.variants().iter().enumerate() {
            if !variant.passed_filters() {
                continue;
            }
            let count = recessive_allele_instances(variant, self.sample_id, &self.pedigree);
            for _ in 0..count {
                instances.push((index, variant.variant_score()));
            }
        }

        // stable sort keeps equal-scored instances in variant order
        instances.sort_by(|a, b| b.1.total_cmp(&a.1));
        if instances.len() < 2 {
            return 0.0;
        }

        let top_two = &instances[..2];
        for &(index, _) in top_two {
            gene.variants_mut()[index].set_contributes_to_gene_score(true);
        }
        (top_two[0].1 + top_two[1].1) / 2.0
    }
}

/// Rank order: combined score descending, then priority score descending,
/// then gene symbol ascending, then gene id ascending. The trailing keys
/// make the order total, so equal-scored genes rank identically across runs
/// regardless of insertion order.
fn rank_order(a: &Gene, b: &Gene) -> Ordering {
    b.combined_score()
        .total_cmp(&a.combined_score())
        .then_with(|| b.priority_score().total_cmp(&a.priority_score()))
        .then_with(|| a.symbol().cmp(b.symbol()))
        .then_with(|| a.gene_id().cmp(&b.gene_id()))
}

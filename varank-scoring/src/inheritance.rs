use varank_core::models::{
    AffectedStatus, FamilyRole, GenotypeCall, Pedigree, VariantEvaluation,
};

/// How many allele instances a passing variant contributes towards a
/// recessive gene score.
///
/// A pedigree-compatible homozygous-alt call contributes two instances: both
/// chromosome copies are hit, so the variant alone can satisfy recessive
/// inheritance. A heterozygous call contributes one instance, as half of a
/// potential compound-heterozygous pair.
///
/// Absent or uncalled genotypes fall back to the permissive assumption of
/// one compound-het-capable instance: with no genotype detail there is
/// nothing to contradict compound-het pairing. Malformed genotype input
/// degrades the same way rather than failing the gene.
pub fn recessive_allele_instances(
    variant: &VariantEvaluation,
    sample_id: usize,
    pedigree: &Pedigree,
) -> u8 {
    match variant.genotype(sample_id) {
        Some(GenotypeCall::HomRef) => 0,
        Some(GenotypeCall::Het) => 1,
        Some(GenotypeCall::HomAlt) => {
            if parents_consistent_with_recessive(variant, pedigree) {
                2
            } else {
                0
            }
        }
        Some(GenotypeCall::NoCall) | None => 1,
    }
}

/// A homozygous-alt proband is consistent with recessive transmission when
/// every genotyped parent could have passed one alternate allele without
/// being affected themselves: heterozygous or uncalled parents are fine, a
/// hom-ref parent cannot transmit, and an unaffected hom-alt parent
/// contradicts the disease model.
fn parents_consistent_with_recessive(variant: &VariantEvaluation, pedigree: &Pedigree) -> bool {
    for (index, person) in pedigree.members().iter().enumerate() {
        if !matches!(person.role(), FamilyRole::Mother | FamilyRole::Father) {
            continue;
        }
        match variant.genotype(index) {
            Some(GenotypeCall::HomRef) => return false,
            Some(GenotypeCall::HomAlt) if person.status() != AffectedStatus::Affected => {
                return false;
            }
            _ => {}
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use varank_core::models::{Person, VariantEffect};

    #[fixture]
    fn trio() -> Pedigree {
        Pedigree::new(vec![
            Person::new("Cain", FamilyRole::Proband, AffectedStatus::Affected),
            Person::new("Eve", FamilyRole::Mother, AffectedStatus::Unaffected),
            Person::new("Adam", FamilyRole::Father, AffectedStatus::Unaffected),
        ])
        .unwrap()
    }

    fn variant_with_genotypes(genotypes: Vec<GenotypeCall>) -> VariantEvaluation {
        VariantEvaluation::builder("1", 12345, "A", "T")
            .effect(VariantEffect::MissenseVariant)
            .genotypes(genotypes)
            .build()
    }

    #[rstest]
    fn test_hom_alt_with_het_parents_counts_twice(trio: Pedigree) {
        let variant = variant_with_genotypes(vec![
            GenotypeCall::HomAlt,
            GenotypeCall::Het,
            GenotypeCall::Het,
        ]);
        assert_eq!(recessive_allele_instances(&variant, 0, &trio), 2);
    }

    #[rstest]
    fn test_hom_alt_with_hom_ref_parent_is_incompatible(trio: Pedigree) {
        let variant = variant_with_genotypes(vec![
            GenotypeCall::HomAlt,
            GenotypeCall::HomRef,
            GenotypeCall::Het,
        ]);
        assert_eq!(recessive_allele_instances(&variant, 0, &trio), 0);
    }

    #[rstest]
    fn test_hom_alt_with_unaffected_hom_alt_parent_is_incompatible(trio: Pedigree) {
        let variant = variant_with_genotypes(vec![
            GenotypeCall::HomAlt,
            GenotypeCall::HomAlt,
            GenotypeCall::Het,
        ]);
        assert_eq!(recessive_allele_instances(&variant, 0, &trio), 0);
    }

    #[rstest]
    fn test_het_counts_once(trio: Pedigree) {
        let variant = variant_with_genotypes(vec![
            GenotypeCall::Het,
            GenotypeCall::Het,
            GenotypeCall::HomRef,
        ]);
        assert_eq!(recessive_allele_instances(&variant, 0, &trio), 1);
    }

    #[rstest]
    fn test_hom_ref_proband_never_counts(trio: Pedigree) {
        let variant = variant_with_genotypes(vec![GenotypeCall::HomRef]);
        assert_eq!(recessive_allele_instances(&variant, 0, &trio), 0);
    }

    #[rstest]
    fn test_missing_genotypes_fall_back_to_permissive(trio: Pedigree) {
        let ungenotyped = variant_with_genotypes(vec![]);
        assert_eq!(recessive_allele_instances(&ungenotyped, 0, &trio), 1);

        let uncalled = variant_with_genotypes(vec![GenotypeCall::NoCall]);
        assert_eq!(recessive_allele_instances(&uncalled, 0, &trio), 1);
    }

    #[rstest]
    fn test_hom_alt_with_ungenotyped_parents_is_compatible(trio: Pedigree) {
        // parents present in the pedigree but absent from the genotype vector
        let variant = variant_with_genotypes(vec![GenotypeCall::HomAlt]);
        assert_eq!(recessive_allele_instances(&variant, 0, &trio), 2);
    }
}

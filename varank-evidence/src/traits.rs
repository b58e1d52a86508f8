use varank_core::models::{FrequencyData, PathogenicityData, Variant};

/// Frequency and pathogenicity evidence for one variant, as returned by the
/// default variant store in a single read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantData {
    pub frequency: FrequencyData,
    pub pathogenicity: PathogenicityData,
}

/// Narrow read interface over a pathogenicity-prediction source.
pub trait PathogenicityStore: Send + Sync {
    fn pathogenicity_data(&self, variant: &Variant) -> PathogenicityData;
}

/// The default variant store: serves frequency data together with the
/// missense-trained pathogenicity bundle (Sift, Polyphen, MutationTaster) in
/// one call.
pub trait VariantStore: Send + Sync {
    fn variant_data(&self, variant: &Variant) -> VariantData;
}

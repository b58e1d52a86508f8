use std::fmt::{self, Display};

/// Enumerated variant consequence type, assigned by the upstream annotation
/// step. varank never computes these, it only routes on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantEffect {
    MissenseVariant,
    FrameshiftVariant,
    StopGained,
    SpliceRegionVariant,
    SynonymousVariant,
    IntronVariant,
    UpstreamGeneVariant,
    DownstreamGeneVariant,
    IntergenicVariant,
    RegulatoryRegionVariant,
    /// Generic fallback when the annotator could not assign anything better.
    SequenceVariant,
}

impl VariantEffect {
    pub fn is_missense(&self) -> bool {
        matches!(self, VariantEffect::MissenseVariant)
    }

    /// Whether this consequence type lies outside of coding sequence.
    pub fn is_non_coding(&self) -> bool {
        matches!(
            self,
            VariantEffect::IntronVariant
                | VariantEffect::UpstreamGeneVariant
                | VariantEffect::DownstreamGeneVariant
                | VariantEffect::IntergenicVariant
                | VariantEffect::RegulatoryRegionVariant
        )
    }
}

/// The genetic transmission pattern assumed when judging whether a genotype
/// pattern can explain a phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeOfInheritance {
    #[default]
    Unspecified,
    AutosomalDominant,
    AutosomalRecessive,
    XDominant,
    XRecessive,
    Mitochondrial,
}

/// Immutable identity of a single genomic change.
///
/// Positions are 1-based. A deletion is encoded with an empty alternate
/// allele, an insertion with an empty reference allele.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    chrom: String,
    position: u32,
    reference: String,
    alternate: String,
    effect: VariantEffect,
}

impl Variant {
    pub fn new(
        chrom: impl Into<String>,
        position: u32,
        reference: impl Into<String>,
        alternate: impl Into<String>,
        effect: VariantEffect,
    ) -> Self {
        Variant {
            chrom: chrom.into(),
            position,
            reference: reference.into(),
            alternate: alternate.into(),
            effect,
        }
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    pub fn effect(&self) -> VariantEffect {
        self.effect
    }

    pub fn is_non_coding(&self) -> bool {
        self.effect.is_non_coding()
    }

    /// The chrom:pos:ref>alt identity string, used as the evidence cache key.
    pub fn key(&self) -> String {
        format!(
            "{}:{}:{}>{}",
            self.chrom, self.position, self.reference, self.alternate
        )
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

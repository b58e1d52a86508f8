pub mod evaluation;
pub mod frequency;
pub mod gene;
pub mod pathogenicity;
pub mod pedigree;
pub mod variant;

pub use evaluation::{FilterResult, FilterType, GenotypeCall, VariantEvaluation};
pub use frequency::{Frequency, FrequencyData, FrequencySource};
pub use gene::{Gene, PriorityResult, PriorityType};
pub use pathogenicity::{PathogenicityData, PathogenicityScore, PathogenicitySource};
pub use pedigree::{AffectedStatus, FamilyRole, Pedigree, Person};
pub use variant::{ModeOfInheritance, Variant, VariantEffect};

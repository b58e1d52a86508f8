use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Frequency must be a percentage in the range [0, 100], got: {0}")]
    FrequencyOutOfRange(f32),

    #[error("Pedigree must contain exactly one proband, found: {0}")]
    InvalidProbandCount(usize),
}

use crate::errors::ModelError;

/// A named population frequency source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencySource {
    ThousandGenomes,
    TopMed,
    EspAll,
    EspAfricanAmerican,
    EspEuropeanAmerican,
    ExacAll,
    GnomadExomes,
    GnomadGenomes,
}

/// A single population frequency observation, as a percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency {
    source: FrequencySource,
    value: f32,
}

impl Frequency {
    pub fn new(source: FrequencySource, value: f32) -> Result<Self, ModelError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(ModelError::FrequencyOutOfRange(value));
        }
        Ok(Frequency { source, value })
    }

    pub fn source(&self) -> FrequencySource {
        self.source
    }

    /// The frequency as a percentage.
    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Population frequency evidence for one variant: an optional reference-SNP
/// identifier plus at most one frequency per source.
///
/// [`FrequencyData::EMPTY`] is the distinguished "no evidence" value; absence
/// is never encoded as an `Option`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencyData {
    rs_id: Option<u32>,
    known: Vec<Frequency>,
}

impl FrequencyData {
    pub const EMPTY: FrequencyData = FrequencyData {
        rs_id: None,
        known: Vec::new(),
    };

    /// Build frequency data, keeping the first entry seen per source.
    pub fn new(rs_id: Option<u32>, frequencies: Vec<Frequency>) -> Self {
        let mut known: Vec<Frequency> = Vec::with_capacity(frequencies.len());
        for frequency in frequencies {
            if !known.iter().any(|f| f.source() == frequency.source()) {
                known.push(frequency);
            }
        }
        FrequencyData { rs_id, known }
    }

    pub fn rs_id(&self) -> Option<u32> {
        self.rs_id
    }

    pub fn known_frequencies(&self) -> &[Frequency] {
        &self.known
    }

    pub fn has_known_frequency(&self) -> bool {
        !self.known.is_empty()
    }

    /// The largest frequency across all sources, if any are known.
    pub fn max_frequency(&self) -> Option<f32> {
        self.known
            .iter()
            .map(Frequency::value)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f32| a.max(v))))
    }

    pub fn is_empty(&self) -> bool {
        self.rs_id.is_none() && self.known.is_empty()
    }
}

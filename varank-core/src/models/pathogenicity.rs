/// A named computational pathogenicity predictor.
///
/// Sift, Polyphen and MutationTaster were trained on missense variants and
/// are served together as one bundle by the default variant store. Cadd
/// covers all effect types; Remm is specialised for non-coding regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathogenicitySource {
    Sift,
    Polyphen,
    MutationTaster,
    Cadd,
    Remm,
}

/// A single pathogenicity prediction in [0, 1], higher means more damaging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathogenicityScore {
    source: PathogenicitySource,
    score: f32,
}

impl PathogenicityScore {
    pub fn new(source: PathogenicitySource, score: f32) -> Self {
        PathogenicityScore { source, score }
    }

    pub fn source(&self) -> PathogenicitySource {
        self.source
    }

    pub fn score(&self) -> f32 {
        self.score
    }
}

/// Pathogenicity evidence for one variant: at most one score per source.
///
/// [`PathogenicityData::EMPTY`] is the distinguished "no evidence" value,
/// shared process-wide, so emptiness checks stay side-effect free.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathogenicityData {
    scores: Vec<PathogenicityScore>,
}

impl PathogenicityData {
    pub const EMPTY: PathogenicityData = PathogenicityData { scores: Vec::new() };

    /// Build pathogenicity data, keeping the first score seen per source.
    pub fn new(scores: Vec<PathogenicityScore>) -> Self {
        let mut kept: Vec<PathogenicityScore> = Vec::with_capacity(scores.len());
        for score in scores {
            if !kept.iter().any(|s| s.source() == score.source()) {
                kept.push(score);
            }
        }
        PathogenicityData { scores: kept }
    }

    pub fn scores(&self) -> &[PathogenicityScore] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The most damaging score across all sources, if any are present.
    pub fn max_score(&self) -> Option<f32> {
        self.scores
            .iter()
            .map(PathogenicityScore::score)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f32| a.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_empty_sentinel() {
        assert!(PathogenicityData::EMPTY.is_empty());
        assert_eq!(PathogenicityData::EMPTY.max_score(), None);
        assert_eq!(PathogenicityData::new(vec![]), PathogenicityData::EMPTY);
    }

    #[rstest]
    fn test_max_score_and_source_dedup() {
        let data = PathogenicityData::new(vec![
            PathogenicityScore::new(PathogenicitySource::Sift, 0.3),
            PathogenicityScore::new(PathogenicitySource::Polyphen, 0.9),
            PathogenicityScore::new(PathogenicitySource::Polyphen, 0.1),
        ]);
        assert_eq!(data.scores().len(), 2);
        assert_eq!(data.max_score(), Some(0.9));
    }
}

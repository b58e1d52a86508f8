use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use tracing::{debug, warn};

use varank_core::models::{
    PathogenicityData, PathogenicityScore, PathogenicitySource, Variant,
};

use crate::cache::EvidenceCache;
use crate::traits::PathogenicityStore;

/// Per-chromosome, position-sorted `(position, score)` records.
type ScoreIndex = HashMap<String, Vec<(u32, f32)>>;

///
/// Get a reader for either a gzip'd or non-gzip'd score file.
///
/// # Arguments
///
/// - path: path to the file to read
///
fn get_score_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let file = File::open(path).with_context(|| format!("Failed to open score file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Compute the store query interval for a variant's locus.
///
/// Substitutions probe the single base at the variant position. Deletions
/// (empty alternate allele) extend the interval by the reference length so
/// every deleted base is probed. Insertions (empty reference allele) widen
/// the interval by one base on each side of the insertion point.
pub fn query_interval(variant: &Variant) -> (u32, u32) {
    let position = variant.position();
    if variant.alternate().is_empty() {
        (position, position.saturating_add(variant.reference().len() as u32))
    } else if variant.reference().is_empty() {
        (position.saturating_sub(1).max(1), position + 1)
    } else {
        (position, position)
    }
}

/// Indexed lookup over a sorted, tab-delimited genomic score file.
///
/// Each line carries at least three columns: chromosome, 1-based position and
/// a floating-point score. The file may be gzip compressed. A range query
/// returns the **maximum** score over all overlapping records, the
/// worst-case policy: one damaging base in a deleted stretch is enough.
///
/// Any I/O failure is logged and degrades to "no evidence"; a run never
/// aborts because one annotation file is unreadable.
///
/// The on-disk file is parsed once, on first lookup, under an internal
/// lock; afterwards reads are lock-free and the store can be shared freely
/// across threads.
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    index: OnceLock<ScoreIndex>,
}

impl ScoreStore {
    /// Open a store over `path`. The file is not touched until the first
    /// lookup; a missing or unreadable file surfaces as "no evidence".
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        ScoreStore {
            path: path.as_ref().to_path_buf(),
            index: OnceLock::new(),
        }
    }

    /// Maximum score over all records on `chrom` with position in
    /// `[start, end]`, or `None` when nothing overlaps.
    pub fn lookup(&self, chrom: &str, start: u32, end: u32) -> Option<f32> {
        let index = self.index.get_or_init(|| self.load_index());
        let positions = index.get(chrom)?;

        let from = positions.partition_point(|&(pos, _)| pos < start);
        positions[from..]
            .iter()
            .take_while(|&&(pos, _)| pos <= end)
            .map(|&(_, score)| score)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f32| a.max(v))))
    }

    fn load_index(&self) -> ScoreIndex {
        match self.try_load() {
            Ok(index) => index,
            Err(e) => {
                warn!("Score store unavailable, treating as no evidence: {:#}", e);
                ScoreIndex::new()
            }
        }
    }

    fn try_load(&self) -> Result<ScoreIndex> {
        let reader = get_score_reader(&self.path)?;
        let mut index = ScoreIndex::new();

        for line in reader.lines() {
            let line = line.with_context(|| format!("Failed reading {:?}", self.path))?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_score_line(&line) {
                Some((chrom, position, score)) => {
                    index
                        .entry(chrom.to_string())
                        .or_default()
                        .push((position, score));
                }
                None => debug!("Skipping malformed score line: {}", line),
            }
        }

        for positions in index.values_mut() {
            positions.sort_by_key(|&(pos, _)| pos);
        }
        Ok(index)
    }
}

fn parse_score_line(line: &str) -> Option<(&str, u32, f32)> {
    let mut fields = line.split('\t');
    let chrom = fields.next()?;
    let position = fields.next()?.parse::<u32>().ok()?;
    let score = fields.next()?.parse::<f32>().ok()?;
    Some((chrom, position, score))
}

/// CADD scores cover every effect type, so this adapter queries the store
/// unconditionally.
#[derive(Debug)]
pub struct CaddScores {
    store: ScoreStore,
    cache: EvidenceCache,
}

impl CaddScores {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        CaddScores {
            store: ScoreStore::open(path),
            cache: EvidenceCache::new(),
        }
    }
}

impl PathogenicityStore for CaddScores {
    fn pathogenicity_data(&self, variant: &Variant) -> PathogenicityData {
        self.cache.get_or_fetch(variant, || {
            fetch_site_score(&self.store, variant, PathogenicitySource::Cadd)
        })
    }
}

/// REMM was trained on non-coding regulatory regions and has never seen a
/// missense variant, so the adapter skips missense queries entirely instead
/// of returning a meaningless score.
#[derive(Debug)]
pub struct RemmScores {
    store: ScoreStore,
    cache: EvidenceCache,
}

impl RemmScores {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        RemmScores {
            store: ScoreStore::open(path),
            cache: EvidenceCache::new(),
        }
    }
}

impl PathogenicityStore for RemmScores {
    fn pathogenicity_data(&self, variant: &Variant) -> PathogenicityData {
        if variant.effect().is_missense() {
            return PathogenicityData::EMPTY;
        }
        self.cache.get_or_fetch(variant, || {
            fetch_site_score(&self.store, variant, PathogenicitySource::Remm)
        })
    }
}

fn fetch_site_score(
    store: &ScoreStore,
    variant: &Variant,
    source: PathogenicitySource,
) -> PathogenicityData {
    let (start, end) = query_interval(variant);
    match store.lookup(variant.chrom(), start, end) {
        Some(score) => PathogenicityData::new(vec![PathogenicityScore::new(source, score)]),
        None => PathogenicityData::EMPTY,
    }
}

use super::signals::SubScores;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const SALARY_WEIGHT: f64 = 0.6;
pub const REPOSTED_WEIGHT: f64 = 0.3;
pub const AGE_WEIGHT: f64 = 0.1;
/// Flat, unweighted penalty for vague descriptions.
pub const VAGUENESS_PENALTY: f64 = 10.0;

pub const MISSING_SALARY_BAND: JitterBand = JitterBand::new(55, 69);
pub const REPOSTED_BAND: JitterBand = JitterBand::new(15, 19);
pub const STALE_POSTING_BAND: JitterBand = JitterBand::new(25, 29);

/// Inclusive integer range a raw sub-score is drawn from before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterBand {
    pub low: u32,
    pub high: u32,
}

impl JitterBand {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.low, self.high)
    }
}

/// Supplies the intra-band spread for weighted sub-scores.
///
/// The spread is intentional: it keeps identical postings from always showing
/// the same figure while the bucket stays stable. Production uses
/// [`RngJitter`]; tests pin draws with [`PinnedJitter`] or a seeded generator.
pub trait JitterSource {
    /// Returns an integer inside `band`, bounds included.
    fn draw(&mut self, band: JitterBand) -> u32;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn draw(&mut self, band: JitterBand) -> u32 {
        (**self).draw(band)
    }
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn draw(&mut self, band: JitterBand) -> u32 {
        self.rng.gen_range(band.low..=band.high)
    }
}

/// Always lands on the same offset from the bottom of each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedJitter {
    offset: u32,
}

impl PinnedJitter {
    pub fn at(offset: u32) -> Self {
        Self { offset }
    }

    pub fn floor() -> Self {
        Self::at(0)
    }

    pub fn ceiling() -> Self {
        Self::at(u32::MAX)
    }
}

impl JitterSource for PinnedJitter {
    fn draw(&mut self, band: JitterBand) -> u32 {
        band.clamp(band.low.saturating_add(self.offset))
    }
}

/// Sub-signal that contributed points to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    MissingSalary,
    Reposted,
    StalePosting,
    Buzzwords,
    Vagueness,
}

impl SignalKind {
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::MissingSalary => "No salary listed",
            SignalKind::Reposted => "Reposted",
            SignalKind::StalePosting => "Posted over two months ago",
            SignalKind::Buzzwords => "Promotional buzzwords",
            SignalKind::Vagueness => "Vague role description",
        }
    }
}

/// Discrete contribution to a score, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: SignalKind,
    pub points: f64,
    pub notes: String,
}

/// Unbucketed combiner output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedScore {
    pub score: f64,
    pub components: Vec<ScoreComponent>,
}

/// Folds sub-signals into one score rounded to a single decimal.
pub fn combine<J>(scores: &SubScores, jitter: &mut J) -> WeightedScore
where
    J: JitterSource + ?Sized,
{
    let mut components = Vec::new();
    let mut total = 0.0;

    if !scores.has_salary {
        let raw = jitter.draw(MISSING_SALARY_BAND);
        let points = f64::from(raw) * SALARY_WEIGHT;
        components.push(ScoreComponent {
            factor: SignalKind::MissingSalary,
            points,
            notes: format!("no salary posted, drew {raw} at weight {SALARY_WEIGHT}"),
        });
        total += points;
    }

    if scores.is_reposted {
        let raw = jitter.draw(REPOSTED_BAND);
        let points = f64::from(raw) * REPOSTED_WEIGHT;
        components.push(ScoreComponent {
            factor: SignalKind::Reposted,
            points,
            notes: format!("posting was reposted, drew {raw} at weight {REPOSTED_WEIGHT}"),
        });
        total += points;
    }

    if scores.is_old() {
        let raw = jitter.draw(STALE_POSTING_BAND);
        let points = f64::from(raw) * AGE_WEIGHT;
        components.push(ScoreComponent {
            factor: SignalKind::StalePosting,
            points,
            notes: format!("posting is stale, drew {raw} at weight {AGE_WEIGHT}"),
        });
        total += points;
    }

    if scores.buzzword_weight > 0 {
        let points = f64::from(scores.buzzword_weight);
        components.push(ScoreComponent {
            factor: SignalKind::Buzzwords,
            points,
            notes: "description uses promotional buzzwords".to_string(),
        });
        total += points;
    }

    if scores.is_vague {
        components.push(ScoreComponent {
            factor: SignalKind::Vagueness,
            points: VAGUENESS_PENALTY,
            notes: "description relies on vague terms".to_string(),
        });
        total += VAGUENESS_PENALTY;
    }

    WeightedScore {
        score: round_to_tenth(total),
        components,
    }
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

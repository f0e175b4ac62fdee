//! Ghost job likelihood scoring.
//!
//! Detectors turn raw posting text into sub-signals, the combiner folds them
//! into a jittered percentage, and the bucket classifier labels the result.

mod bucket;
mod combiner;
mod lexicon;
mod signals;

pub use bucket::{badge_text, Bucket, Severity};
pub use combiner::{
    combine, JitterBand, JitterSource, PinnedJitter, RngJitter, ScoreComponent, SignalKind,
    WeightedScore, AGE_WEIGHT, MISSING_SALARY_BAND, REPOSTED_BAND, REPOSTED_WEIGHT,
    SALARY_WEIGHT, STALE_POSTING_BAND, VAGUENESS_PENALTY,
};
pub use lexicon::{BUZZWORDS, VAGUE_TERMS};
pub use signals::{
    contains_buzzwords, count_vague_terms, evaluate_job_age, has_salary, is_vague,
    repost_marker_present, RawSignals, SubScores, BUZZWORD_WEIGHT, OLD_POSTING_SCORE,
    VAGUE_TERM_THRESHOLD,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scores postings with a jitter source it owns.
pub struct ScoringEngine<J> {
    jitter: J,
}

impl<J: JitterSource> ScoringEngine<J> {
    pub fn new(jitter: J) -> Self {
        Self { jitter }
    }

    pub fn evaluate(&mut self, signals: &RawSignals) -> GhostJobAssessment {
        evaluate(signals, &mut self.jitter)
    }
}

/// Scored and labeled posting, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostJobAssessment {
    pub score: f64,
    pub label: String,
    pub severity: Severity,
    pub bucket: Bucket,
    pub color: String,
    pub badge: String,
    pub signals: SubScores,
    pub components: Vec<ScoreComponent>,
}

/// Runs detectors, combiner and classifier over one set of raw signals.
pub fn evaluate<J>(signals: &RawSignals, jitter: &mut J) -> GhostJobAssessment
where
    J: JitterSource + ?Sized,
{
    let sub_scores = SubScores::detect(signals);
    let WeightedScore { score, components } = combine(&sub_scores, jitter);
    let bucket = Bucket::classify(score);

    debug!(
        has_salary = sub_scores.has_salary,
        is_reposted = sub_scores.is_reposted,
        age_score = sub_scores.age_score,
        is_vague = sub_scores.is_vague,
        buzzword_weight = sub_scores.buzzword_weight,
        score,
        bucket = bucket.label(),
        "scored job posting"
    );

    GhostJobAssessment {
        score,
        label: bucket.label().to_string(),
        severity: bucket.severity(),
        bucket,
        color: bucket.color().to_string(),
        badge: badge_text(score, bucket),
        signals: sub_scores,
        components,
    }
}

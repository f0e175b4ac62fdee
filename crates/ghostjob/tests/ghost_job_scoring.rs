//! End-to-end scoring scenarios exercised through the public engine API.
//!
//! Scores carry intentional jitter, so assertions pin the jitter source or
//! check the bounds the bands allow rather than exact figures.

use ghostjob::scoring::{
    count_vague_terms, evaluate, Bucket, JitterBand, JitterSource, PinnedJitter, RawSignals,
    RngJitter, ScoringEngine, Severity, SignalKind, SubScores, BUZZWORDS, BUZZWORD_WEIGHT,
    OLD_POSTING_SCORE,
};

const LOADED_DESCRIPTION: &str = "Join our fast-paced, dynamic work environment! \
    We need a self-starter who can wear many hats and is a true go-getter.";

/// Replays a fixed list of draws, clamped to each band.
struct ScriptedJitter {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedJitter {
    fn new(draws: Vec<u32>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl JitterSource for ScriptedJitter {
    fn draw(&mut self, band: JitterBand) -> u32 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        band.clamp(value)
    }
}

fn loaded_posting() -> RawSignals {
    RawSignals::new(LOADED_DESCRIPTION, "1 year", "", true)
}

#[test]
fn loaded_posting_raises_every_signal() {
    let buzzwords = BUZZWORDS
        .iter()
        .filter(|term| LOADED_DESCRIPTION.to_lowercase().contains(*term))
        .count();
    assert_eq!(buzzwords, 5);
    assert_eq!(count_vague_terms(LOADED_DESCRIPTION), 4);

    let sub_scores = SubScores::detect(&loaded_posting());
    assert_eq!(
        sub_scores,
        SubScores {
            has_salary: false,
            is_reposted: true,
            age_score: OLD_POSTING_SCORE,
            is_vague: true,
            buzzword_weight: BUZZWORD_WEIGHT,
        }
    );
}

#[test]
fn loaded_posting_score_stays_within_band_bounds() {
    let lower = 55.0 * 0.6 + 15.0 * 0.3 + 25.0 * 0.1 + 20.0 + 10.0;
    let upper = 69.0 * 0.6 + 19.0 * 0.3 + 29.0 * 0.1 + 20.0 + 10.0;

    let floor = evaluate(&loaded_posting(), &mut PinnedJitter::floor());
    let ceiling = evaluate(&loaded_posting(), &mut PinnedJitter::ceiling());
    assert!((floor.score - lower).abs() < 0.05, "floor {}", floor.score);
    assert!((ceiling.score - upper).abs() < 0.05, "ceiling {}", ceiling.score);

    let mut jitter = RngJitter::from_entropy();
    for _ in 0..200 {
        let assessment = evaluate(&loaded_posting(), &mut jitter);
        assert!(
            assessment.score >= floor.score && assessment.score <= ceiling.score,
            "score {} escaped [{}, {}]",
            assessment.score,
            floor.score,
            ceiling.score
        );
        assert_eq!(assessment.bucket, Bucket::RedFlag);
        assert_eq!(assessment.severity, Severity::High);
    }
}

#[test]
fn loaded_posting_records_components_in_order() {
    let assessment = evaluate(&loaded_posting(), &mut PinnedJitter::floor());
    let factors: Vec<_> = assessment
        .components
        .iter()
        .map(|component| component.factor)
        .collect();

    assert_eq!(
        factors,
        vec![
            SignalKind::MissingSalary,
            SignalKind::Reposted,
            SignalKind::StalePosting,
            SignalKind::Buzzwords,
            SignalKind::Vagueness,
        ]
    );
    let total: f64 = assessment.components.iter().map(|c| c.points).sum();
    assert!((total - assessment.score).abs() < 0.05);
}

#[test]
fn empty_posting_lands_in_missing_salary_range() {
    let mut jitter = RngJitter::seeded(2024);
    for _ in 0..100 {
        let assessment = evaluate(&RawSignals::default(), &mut jitter);
        assert!((33.0..=41.4).contains(&assessment.score));
        assert_eq!(assessment.label, "You can Apply");
        assert!(assessment.badge.ends_with("% Ghost Job)"));
    }
}

#[test]
fn identical_draws_give_identical_scores() {
    let signals = loaded_posting();
    let first = evaluate(&signals, &mut ScriptedJitter::new(vec![61, 17, 27]));
    let second = evaluate(&signals, &mut ScriptedJitter::new(vec![61, 17, 27]));
    assert_eq!(first, second);
    assert_eq!(first.score, 74.4);

    let mut left = ScoringEngine::new(RngJitter::seeded(5));
    let mut right = ScoringEngine::new(RngJitter::seeded(5));
    for _ in 0..10 {
        assert_eq!(left.evaluate(&signals), right.evaluate(&signals));
    }
}

#[test]
fn posted_salary_removes_the_largest_contribution() {
    let mut signals = loaded_posting();
    signals.compensation_text = "$95K/yr - $120K/yr".to_string();

    let assessment = evaluate(&signals, &mut PinnedJitter::ceiling());
    assert!(assessment.signals.has_salary);
    assert_eq!(assessment.score, 38.6);
    assert_eq!(assessment.bucket, Bucket::YouCanApply);
}

#[test]
fn unmapped_scores_are_unclassified() {
    // Salary posted, reposted, stale, no buzzwords, vague: 7.0..=8.6 plus 10.
    let signals = RawSignals::new(
        "Team player with industry knowledge and relevant experience to make an impact. $70k",
        "6 months ago",
        "",
        true,
    );
    let assessment = evaluate(&signals, &mut PinnedJitter::floor());
    assert_eq!(assessment.score, 17.0);
    assert_eq!(assessment.bucket, Bucket::Unclassified);
    assert_eq!(assessment.severity, Severity::Unknown);
    assert_eq!(assessment.badge, "Unclassified (17% Ghost Job)");
}

#[test]
fn classifier_boundaries() {
    assert_eq!(Bucket::classify(20.0).label(), "You can Apply");
    assert_eq!(Bucket::classify(45.0).label(), "You can Apply");
    assert_eq!(Bucket::classify(46.0).label(), "Think Before You Apply");
    assert_eq!(Bucket::classify(55.0).label(), "Think Before You Apply");
    assert_eq!(Bucket::classify(55.1).label(), "It's a Red Flag");
    assert_eq!(Bucket::classify(9.9).label(), "Nice to Apply");
}

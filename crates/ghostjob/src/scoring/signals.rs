use super::lexicon::{mentions, BUZZWORDS, VAGUE_TERMS};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

/// A description must mention more than this many vague terms to count as vague.
pub const VAGUE_TERM_THRESHOLD: usize = 3;
/// Flat, unweighted contribution when any buzzword is present.
pub const BUZZWORD_WEIGHT: u8 = 20;
/// Age sub-score assigned to postings older than roughly two months.
pub const OLD_POSTING_SCORE: u8 = 30;

const REPOST_MARKER: &str = "Reposted";
const OLD_MONTH_COUNT: u64 = 2;
const OLD_WEEK_COUNT: u64 = 8;

static AGE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Text fragments captured from a job posting for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSignals {
    #[serde(deserialize_with = "null_as_default")]
    pub description_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub compensation_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_reposted: bool,
}

impl RawSignals {
    pub fn new(
        description_text: impl Into<String>,
        age_text: impl Into<String>,
        compensation_text: impl Into<String>,
        is_reposted: bool,
    ) -> Self {
        Self {
            description_text: description_text.into(),
            age_text: age_text.into(),
            compensation_text: compensation_text.into(),
            is_reposted,
        }
    }

    /// Flags the posting as reposted when any header fragment carries the marker.
    /// An existing repost flag is never cleared.
    pub fn merge_repost_marker<'a, I>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        if repost_marker_present(fragments) {
            self.is_reposted = true;
        }
    }
}

/// Intermediate classifications feeding the combiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub has_salary: bool,
    pub is_reposted: bool,
    pub age_score: u8,
    pub is_vague: bool,
    pub buzzword_weight: u8,
}

impl SubScores {
    pub fn detect(signals: &RawSignals) -> Self {
        let description = signals.description_text.as_str();
        Self {
            has_salary: has_salary(description) || has_salary(&signals.compensation_text),
            is_reposted: signals.is_reposted,
            age_score: evaluate_job_age(&signals.age_text),
            is_vague: is_vague(description),
            buzzword_weight: if contains_buzzwords(description) {
                BUZZWORD_WEIGHT
            } else {
                0
            },
        }
    }

    pub fn is_old(&self) -> bool {
        self.age_score > 0
    }
}

/// True when the text carries a dollar sign. No amount parsing is attempted.
pub fn has_salary(text: &str) -> bool {
    text.contains('$')
}

/// Number of distinct vague terms mentioned in the description.
pub fn count_vague_terms(description: &str) -> usize {
    let lowered = description.to_lowercase();
    VAGUE_TERMS
        .iter()
        .filter(|term| mentions(&lowered, term))
        .count()
}

pub fn is_vague(description: &str) -> bool {
    count_vague_terms(description) > VAGUE_TERM_THRESHOLD
}

/// Presence-only check; stops at the first buzzword found.
pub fn contains_buzzwords(description: &str) -> bool {
    let lowered = description.to_lowercase();
    BUZZWORDS.iter().any(|term| mentions(&lowered, term))
}

/// Scores the first `<n> <unit>` phrase in the age text.
///
/// Any positive year count, more than two months, or at least eight weeks is
/// treated as old. Days, unknown units and unmatched text are never old.
pub fn evaluate_job_age(age_text: &str) -> u8 {
    let Some(captures) = age_pattern().captures(age_text) else {
        return 0;
    };

    // Digits only, so parsing can fail solely on overflow.
    let count = captures[1].parse::<u64>().unwrap_or(u64::MAX);
    let unit = captures[2].to_ascii_lowercase();

    let old = if unit.starts_with("year") {
        count > 0
    } else if unit.starts_with("month") {
        count > OLD_MONTH_COUNT
    } else if unit.starts_with("week") {
        count >= OLD_WEEK_COUNT
    } else {
        false
    };

    if old {
        OLD_POSTING_SCORE
    } else {
        0
    }
}

/// True when any header fragment carries the site's "Reposted" marker.
pub fn repost_marker_present<'a, I>(fragments: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .any(|fragment| fragment.contains(REPOST_MARKER))
}

// Extractors send `null` when a page node has no text.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn age_pattern() -> &'static Regex {
    AGE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+)\s+(years?|months?|weeks?|days?)")
            .expect("age pattern is a valid regex")
    })
}

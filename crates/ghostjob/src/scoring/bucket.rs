use serde::{Deserialize, Serialize};

/// Display severity attached to a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    MediumLow,
    MediumHigh,
    High,
    Unknown,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::MediumLow => "medium-low",
            Severity::MediumHigh => "medium-high",
            Severity::High => "high",
            Severity::Unknown => "unknown",
        }
    }
}

/// Labeled score range shown on the badge.
///
/// Scores in `[10, 20)` and strictly between 45 and 46 match none of the
/// labeled ranges and land in [`Bucket::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    NiceToApply,
    Unclassified,
    YouCanApply,
    ThinkBeforeYouApply,
    RedFlag,
}

impl Bucket {
    pub fn classify(score: f64) -> Self {
        if score < 10.0 {
            Bucket::NiceToApply
        } else if (20.0..=45.0).contains(&score) {
            Bucket::YouCanApply
        } else if (46.0..=55.0).contains(&score) {
            Bucket::ThinkBeforeYouApply
        } else if score > 55.0 {
            Bucket::RedFlag
        } else {
            Bucket::Unclassified
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::NiceToApply => "Nice to Apply",
            Bucket::Unclassified => "Unclassified",
            Bucket::YouCanApply => "You can Apply",
            Bucket::ThinkBeforeYouApply => "Think Before You Apply",
            Bucket::RedFlag => "It's a Red Flag",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Bucket::NiceToApply => Severity::Low,
            Bucket::Unclassified => Severity::Unknown,
            Bucket::YouCanApply => Severity::MediumLow,
            Bucket::ThinkBeforeYouApply => Severity::MediumHigh,
            Bucket::RedFlag => Severity::High,
        }
    }

    /// Badge background color.
    pub fn color(&self) -> &'static str {
        match self {
            Bucket::NiceToApply => "green",
            Bucket::Unclassified => "gray",
            Bucket::YouCanApply => "purple",
            Bucket::ThinkBeforeYouApply => "orange",
            Bucket::RedFlag => "red",
        }
    }
}

/// Renders `"<Label> (<score>% Ghost Job)"`.
pub fn badge_text(score: f64, bucket: Bucket) -> String {
    format!("{} ({}% Ghost Job)", bucket.label(), format_score(score))
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

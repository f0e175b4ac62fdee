/// Promotional phrases that tend to pad low-specificity postings.
pub const BUZZWORDS: &[&str] = &[
    "dynamic work environment",
    "self-starter",
    "fast-paced",
    "wear many hats",
    "flexible",
    "motivated",
    "great company culture",
    "fun work environment",
    "like a family",
    "results-oriented",
    "entry-level",
    "competitive salary",
    "fast track",
    "uncapped commission",
    "immediate start",
    "reliable team player",
    "passionate about excellence",
    "work hard, play hard",
    "upbeat environment",
    "cutting-edge",
    "innovative solutions",
    "start-up atmosphere",
    "seeking superstars",
    "best-in-class",
    "out-of-the-box thinker",
    "go-getter",
];

/// Phrases that stand in for concrete role detail. Counted, not just detected.
pub const VAGUE_TERMS: &[&str] = &[
    "dynamic work environment",
    "self-starter",
    "team player",
    "fast-paced",
    "wear many hats",
    "flexible",
    "motivated",
    "relevant experience",
    "industry knowledge",
    "make an impact",
    "any relevant experience",
    "industry practices",
    "great company culture",
    "fun work environment",
    "like a family",
    "variety of responsibilities",
];

/// Case-insensitive substring test. Phrase lists are stored lowercase.
pub(crate) fn mentions(haystack_lower: &str, phrase: &str) -> bool {
    haystack_lower.contains(&phrase.to_lowercase())
}

/// Phrases whose presence suggests a reply is an account plan.
pub const PLAN_KEYWORDS: [&str; 6] = [
    "account plan",
    "executive summary",
    "company overview",
    "engagement strategy",
    "key stakeholders",
    "pain points",
];

/// Minimum number of distinct keywords for a reply to count as a plan.
pub const PLAN_KEYWORD_THRESHOLD: usize = 3;

/// Whether `text` reads like an account plan.
///
/// Each keyword counts once no matter how often it occurs; matching is
/// case-insensitive substring containment.
pub fn looks_like_plan(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let matches = PLAN_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count();
    matches >= PLAN_KEYWORD_THRESHOLD
}

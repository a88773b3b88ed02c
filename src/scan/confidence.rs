//! Confidence scoring for pattern matches.
//!
//! Every match starts at [`BASE_CONFIDENCE`] and is adjusted by the shape
//! of the candidate name and by markers on the source line. The result is
//! clamped to `[0.0, 1.0]`.

/// Starting score for every match.
pub const BASE_CONFIDENCE: f64 = 0.5;

/// Name fragments that almost always denote environment variables.
pub const COMMON_ENV_NAMES: &[&str] = &[
    "PORT",
    "HOST",
    "DATABASE_URL",
    "API_KEY",
    "SECRET_KEY",
    "NODE_ENV",
    "ENVIRONMENT",
    "DEBUG",
    "LOG_LEVEL",
    "TIMEOUT",
];

/// Lowercase line fragments that indicate environment access.
pub const CONTEXT_MARKERS: &[&str] = &["process.env", "os.getenv", "os.environ", "$env:", "${"];

/// Score how likely `name`, matched on `line`, is an environment variable.
///
/// # Example
///
/// ```
/// use envlint::scan::confidence;
///
/// let strong = confidence("DATABASE_URL", "url = process.env.DATABASE_URL");
/// let weak = confidence("AB", "x = 'AB'");
/// assert_eq!(strong, 1.0);
/// assert!(weak < 0.7);
/// ```
pub fn confidence(name: &str, line: &str) -> f64 {
    let mut score = BASE_CONFIDENCE;
    let length = name.chars().count();
    let upper = name.to_uppercase();

    if upper == name && length > 1 {
        score += 0.3;
    }
    if name.contains('_') {
        score += 0.2;
    }
    if length <= 2 {
        score -= 0.3;
    }
    if COMMON_ENV_NAMES.iter().any(|common| upper.contains(common)) {
        score += 0.2;
    }

    let lower_line = line.to_lowercase();
    if CONTEXT_MARKERS.iter().any(|marker| lower_line.contains(marker)) {
        score += 0.2;
    }

    score.clamp(0.0, 1.0)
}

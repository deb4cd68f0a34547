use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("the regex pattern is empty")]
    Empty,
    #[error("invalid regex pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// Patterns always match case-insensitively.
pub fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// Captured groups of the first match, in pattern order.
///
/// Groups that did not take part in the match come back as empty strings so
/// the result always has one entry per group in the pattern.
pub fn capture_groups(regex: &Regex, text: &str) -> Option<Vec<String>> {
    let caps = regex.captures(text)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect(),
    )
}

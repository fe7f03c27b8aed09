use once_cell::sync::Lazy;
use regex::Regex;

use crate::prompts::marketing_copy_prompt::VARIATION_SEPARATOR;

static BOLD_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\*\*variation\s+\d+:?\*\*\s*").unwrap());
static PLAIN_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^variation\s+\d+:?\s*").unwrap());
static BOLD_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

pub struct VariationParser;

impl VariationParser {
    /// Splits raw model output into cleaned variations, preserving the
    /// order they were generated in.
    pub fn parse(raw: &str) -> Vec<String> {
        raw.split(VARIATION_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(Self::clean_segment)
            .collect()
    }

    // Strips at most one leading "Variation N:" label, bold form first,
    // then removes any remaining bold markup pairs.
    fn clean_segment(segment: &str) -> String {
        let without_label = if let Some(label) = BOLD_LABEL.find(segment) {
            &segment[label.end()..]
        } else if let Some(label) = PLAIN_LABEL.find(segment) {
            &segment[label.end()..]
        } else {
            segment
        };

        BOLD_MARKUP
            .replace_all(without_label.trim(), "$1")
            .into_owned()
    }
}

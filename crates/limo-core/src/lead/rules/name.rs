//! Client name extraction.
//!
//! Strategies run from most to least specific; the first one that resolves
//! the name ends the pass.

use tracing::debug;

use crate::models::lead::ExtractionResult;

use super::patterns::{
    FIRST_NAME_LABEL, GREETING_NAME, LABELED_NAME, LAST_NAME_LABEL, LEADING_NAME, LEAD_INFO_NAME,
};
use super::ExtractionPass;
use crate::lead::text::LeadText;

/// A name strategy returns `true` once the name is resolved.
type NameStrategy = fn(&LeadText, &mut ExtractionResult) -> bool;

const STRATEGIES: [(&str, NameStrategy); 5] = [
    ("label", labeled_name),
    ("first/last labels", separate_labels),
    ("leading line", leading_name),
    ("lead info", lead_info_name),
    ("greeting", greeting_name),
];

/// Name extraction pass.
pub struct NamePass;

impl ExtractionPass for NamePass {
    fn name(&self) -> &'static str {
        "name"
    }

    fn run(&self, input: &LeadText, result: &mut ExtractionResult) {
        for (label, strategy) in STRATEGIES {
            if strategy(input, result) {
                debug!(
                    "Name resolved by {} strategy: {:?} {:?}",
                    label, result.first_name.text, result.last_name.text
                );
                return;
            }
        }
    }
}

/// "Name: John Smith", "Passenger: John", ...
fn labeled_name(input: &LeadText, result: &mut ExtractionResult) -> bool {
    let caps = LABELED_NAME.captures(&input.normalized).or_else(|| {
        input
            .lines
            .iter()
            .find_map(|line| LABELED_NAME.captures(line))
    });

    let Some(caps) = caps else {
        return false;
    };

    if let Some(first) = caps.get(1) {
        result.first_name.set(first.as_str(), 0.9);
    }
    if let Some(last) = caps.get(2) {
        result.last_name.set(last.as_str(), 0.9);
    }
    true
}

/// "First Name: John" and "Last Name: Smith" on their own lines.
///
/// A partial hit keeps its value but lets later strategies run.
fn separate_labels(input: &LeadText, result: &mut ExtractionResult) -> bool {
    let mut found_first = false;
    let mut found_last = false;

    for line in &input.lines {
        if !found_first {
            if let Some(caps) = FIRST_NAME_LABEL.captures(line) {
                result.first_name.set(&caps[1], 0.85);
                found_first = true;
            }
        }

        if !found_last {
            if let Some(caps) = LAST_NAME_LABEL.captures(line) {
                result.last_name.set(&caps[1], 0.85);
                found_last = true;
            }
        }
    }

    found_first && found_last
}

/// "John Smith, ..." at the start of one of the first three lines.
fn leading_name(input: &LeadText, result: &mut ExtractionResult) -> bool {
    for line in input.lines.iter().take(3) {
        if let Some(caps) = LEADING_NAME.captures(line.trim()) {
            result.first_name.set(&caps[1], 0.7);
            result.last_name.set(&caps[2], 0.7);
            return true;
        }
    }
    false
}

/// Lead notification boilerplate: "Here is your lead info!" then "Name: ...".
fn lead_info_name(input: &LeadText, result: &mut ExtractionResult) -> bool {
    match LEAD_INFO_NAME.captures(&input.normalized) {
        Some(caps) => {
            result.first_name.set(&caps[1], 0.95);
            result.last_name.set(&caps[2], 0.95);
            true
        }
        None => false,
    }
}

/// "Dear John", "Hi John Smith,"
fn greeting_name(input: &LeadText, result: &mut ExtractionResult) -> bool {
    let Some(caps) = GREETING_NAME.captures(&input.normalized) else {
        return false;
    };

    result.first_name.set(&caps[1], 0.6);
    if let Some(last) = caps.get(2) {
        result.last_name.set(last.as_str(), 0.6);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new();
        NamePass.run(&LeadText::new(text), &mut result);
        result
    }

    #[test]
    fn test_labeled_name() {
        let result = run("Name: John Smith\nPhone: 555-123-4567");
        assert_eq!(result.first_name.text, "John");
        assert_eq!(result.last_name.text, "Smith");
        assert_eq!(result.first_name.confidence, 0.9);
    }

    #[test]
    fn test_label_beats_separate_labels() {
        let result = run("Name: John Smith\nFirst Name: Jane\nLast Name: Doe");
        assert_eq!(result.first_name.text, "John");
        assert_eq!(result.last_name.text, "Smith");
    }

    #[test]
    fn test_separate_labels() {
        // Labels spelled with "name" are already taken by the label strategy.
        let result = run("First: Jane\nLast: Doe");
        assert_eq!(result.first_name.text, "Jane");
        assert_eq!(result.last_name.text, "Doe");
        assert_eq!(result.last_name.confidence, 0.85);
    }

    #[test]
    fn test_leading_name() {
        let result = run("Mary Jones, booking request\nPlease call me");
        assert_eq!(result.first_name.text, "Mary");
        assert_eq!(result.last_name.text, "Jones");
        assert_eq!(result.first_name.confidence, 0.7);
    }

    #[test]
    fn test_leading_name_needs_trailing_separator() {
        let result = run("Mary Jones\nsee below");
        assert_eq!(result.first_name.text, "");
    }

    #[test]
    fn test_greeting() {
        let result = run("hello Alex, thanks for reaching out");
        assert_eq!(result.first_name.text, "Alex");
        assert_eq!(result.last_name.text, "");
        assert_eq!(result.first_name.confidence, 0.6);
    }

    #[test]
    fn test_no_name() {
        let result = run("Thanks for your help!");
        assert!(result.first_name.is_empty());
        assert!(result.last_name.is_empty());
    }
}

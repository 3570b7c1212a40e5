//! Email address extraction.

use tracing::debug;

use crate::lead::text::LeadText;
use crate::models::lead::ExtractionResult;

use super::patterns::{EMAIL, LABELED_EMAIL};
use super::{ExtractionMatch, ExtractionPass, FieldExtractor};

/// Plain email address extractor.
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = EMAIL.captures(text)?;
        let address = caps.get(1)?;
        Some(
            ExtractionMatch::new(address.as_str().to_string(), 0.95, address.as_str())
                .with_position(address.start(), address.end()),
        )
    }
}

/// Email extraction pass.
///
/// A labeled address ("Email: ...") is only consulted when the plain
/// search found nothing.
pub struct EmailPass;

impl ExtractionPass for EmailPass {
    fn name(&self) -> &'static str {
        "email"
    }

    fn run(&self, input: &LeadText, result: &mut ExtractionResult) {
        if let Some(m) = EmailExtractor.extract_from(input) {
            debug!("Email found: {}", m.value);
            result.email.set(m.value, m.confidence);
            return;
        }

        let labeled = input
            .lines
            .iter()
            .find_map(|line| LABELED_EMAIL.captures(line).map(|caps| caps[1].to_string()));

        if let Some(email) = labeled {
            debug!("Labeled email found: {}", email);
            result.email.set(email, 0.98);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_email() {
        let m = EmailExtractor
            .extract("Contact: john.smith+limo@example.co.uk today")
            .unwrap();
        assert_eq!(m.value, "john.smith+limo@example.co.uk");
        assert_eq!(m.confidence, 0.95);
    }

    #[test]
    fn test_pass_takes_first_address() {
        let mut result = ExtractionResult::new();
        EmailPass.run(
            &LeadText::new("Email: first@example.com\nCC: second@example.com"),
            &mut result,
        );
        assert_eq!(result.email.text, "first@example.com");
        assert_eq!(result.email.confidence, 0.95);
    }

    #[test]
    fn test_no_email() {
        let mut result = ExtractionResult::new();
        EmailPass.run(&LeadText::new("reach me at john at example dot com"), &mut result);
        assert!(result.email.is_empty());
    }
}

//! Heuristic field extraction over resume text. Every rule is best-effort:
//! no match means an absent field, never an error.

use std::collections::BTreeSet;

use regex::Regex;

use crate::models::ResumeProfile;
use crate::scrape::contact::is_generic_sender;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Phone patterns, most specific first. Intentionally overlapping; the first
/// pattern with any match wins regardless of position in the text.
const PHONE_PATTERNS: &[&str] = &[
    r"\+\d{1,3}[-\s]?\d{10}", // +<country>, optional separator
    r"\+\d{1,3}\d{10}",       // +<country>, no separator
    r"\d{10}",                // bare 10 digits
    r"\d{5}\s?\d{5}",         // 5 + 5 split
];

/// Lines considered when looking for the candidate's name.
const NAME_SCAN_LINES: usize = 5;
/// A name line has at most this many whitespace-separated words.
const NAME_MAX_WORDS: usize = 4;

/// Known technology terms matched case-insensitively anywhere in the text.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "javascript", "java", "react", "node", "fastapi",
    "flask", "django", "html", "css", "sql", "mysql", "mongodb",
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy",
    "langchain", "llm", "nlp", "machine learning", "deep learning",
    "ai", "artificial intelligence", "git", "github", "docker",
    "aws", "azure", "gcp", "api", "rest", "graphql",
    "typescript", "angular", "vue", "express", "bootstrap",
    "tailwind", "redux", "nextjs", "nestjs", "spring boot",
    "c++", "c#", "ruby", "php", "swift", "kotlin", "rust",
    "opencv", "keras", "spark", "hadoop", "kafka", "redis",
    "faiss", "hugging face", "rag", "semantic search",
];

pub struct FieldExtractor {
    email: Regex,
    phones: Vec<Regex>,
}

impl FieldExtractor {
    pub fn new() -> Self {
        // Static patterns; parse failures here are programmer errors.
        Self {
            email: Regex::new(EMAIL_PATTERN).unwrap(),
            phones: PHONE_PATTERNS
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
        }
    }

    /// Runs all four rules over `raw_text` and assembles the profile.
    pub fn extract_profile(&self, raw_text: &str) -> ResumeProfile {
        ResumeProfile {
            name: self.extract_name(raw_text),
            email: self.extract_email(raw_text),
            phone: self.extract_phone(raw_text),
            skills: self.extract_skills(raw_text),
            raw_text: raw_text.to_string(),
        }
    }

    /// First email in document order that is not a generic sender address.
    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .find(|email| !is_generic_sender(email))
    }

    /// First match of the first pattern that matches anywhere, normalized by
    /// stripping spaces and hyphens. Earlier patterns take precedence even
    /// when a later pattern would match earlier in the text.
    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phones
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().replace([' ', '-'], ""))
    }

    /// Every vocabulary term found in the text, once, title-cased. Set
    /// semantics: output is sorted, not in discovery order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let found: BTreeSet<String> = SKILL_VOCABULARY
            .iter()
            .filter(|term| lowered.contains(*term))
            .map(|term| title_case(term))
            .collect();
        found.into_iter().collect()
    }

    /// First of the leading lines that is non-empty, short enough to be a
    /// name, and carries no `@`.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        text.lines()
            .take(NAME_SCAN_LINES)
            .map(str::trim)
            .find(|line| {
                !line.is_empty()
                    && line.split_whitespace().count() <= NAME_MAX_WORDS
                    && !line.contains('@')
            })
            .map(str::to_string)
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercases the first letter of each word, lowercasing the rest. Word
/// starts follow any non-alphabetic character, so "scikit-learn" becomes
/// "Scikit-Learn" and "hugging face" becomes "Hugging Face".
fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut at_word_start = true;
    for ch in term.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "Jane A. Doe\n\
        jane@doe.com | +91-9876543210\n\
        Experienced in Python and React development.\n\
        Shipped FastAPI services on AWS with Docker.\n";

    #[test]
    fn denylisted_email_is_skipped() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_email("contact: noreply@corp.com, jane@corp.com"),
            Some("jane@corp.com".to_string())
        );
    }

    #[test]
    fn email_absent_when_no_match_survives() {
        let extractor = FieldExtractor::new();
        assert_eq!(extractor.extract_email("donotreply@corp.com only"), None);
        assert_eq!(extractor.extract_email("no address here"), None);
    }

    #[test]
    fn phone_with_country_code_and_separator_is_normalized() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_phone("+91-9876543210"),
            Some("+919876543210".to_string())
        );
        assert_eq!(
            extractor.extract_phone("+91 9876543210"),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn bare_ten_digit_phone_is_returned_as_is() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_phone("9876543210"),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn split_five_five_phone_is_joined() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_phone("call 98765 43218 today"),
            Some("9876543218".to_string())
        );
    }

    #[test]
    fn separatorless_number_matches_the_first_pattern_too() {
        // The separator in pattern one is optional, so a separator-less
        // number earlier in the text beats a separator-bearing one later.
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_phone("+912222222222 office, +91 1111111111 mobile"),
            Some("+912222222222".to_string())
        );
    }

    #[test]
    fn earlier_pattern_wins_over_earlier_position() {
        // The bare number appears first in the text, but the country-code
        // pattern ranks higher.
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_phone("office 1234567890, mobile +91-9876543210"),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn phone_absent_when_nothing_matches() {
        let extractor = FieldExtractor::new();
        assert_eq!(extractor.extract_phone("ext. 4321"), None);
    }

    #[test]
    fn skills_are_case_insensitive_deduplicated_and_title_cased() {
        let extractor = FieldExtractor::new();
        let skills = extractor.extract_skills("Experienced in Python and React development");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"React".to_string()));
        // "python" appears once even though "Python" matched case-insensitively.
        assert_eq!(skills.iter().filter(|s| *s == "Python").count(), 1);
    }

    #[test]
    fn multi_word_and_hyphenated_skills_keep_their_shape() {
        let extractor = FieldExtractor::new();
        let skills =
            extractor.extract_skills("machine learning with scikit-learn and hugging face");
        assert!(skills.contains(&"Machine Learning".to_string()));
        assert!(skills.contains(&"Scikit-Learn".to_string()));
        assert!(skills.contains(&"Hugging Face".to_string()));
    }

    #[test]
    fn name_is_the_first_qualifying_leading_line() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_name("Jane A. Doe\njane@doe.com\n"),
            Some("Jane A. Doe".to_string())
        );
    }

    #[test]
    fn email_bearing_and_long_lines_are_not_names() {
        let extractor = FieldExtractor::new();
        let text = "jane@doe.com\nA very long headline with many words in it\nJane Doe\n";
        assert_eq!(extractor.extract_name(text), Some("Jane Doe".to_string()));
    }

    #[test]
    fn name_absent_when_no_leading_line_qualifies() {
        let extractor = FieldExtractor::new();
        let text = "jane@doe.com\n\n\n\n\nJane Doe appears only on line six\n";
        assert_eq!(extractor.extract_name(text), None);
    }

    #[test]
    fn full_profile_assembly() {
        let profile = FieldExtractor::new().extract_profile(SAMPLE_RESUME);
        assert_eq!(profile.name.as_deref(), Some("Jane A. Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane@doe.com"));
        assert_eq!(profile.phone.as_deref(), Some("+919876543210"));
        for skill in ["Python", "React", "Fastapi", "Aws", "Docker"] {
            assert!(
                profile.skills.contains(&skill.to_string()),
                "missing {skill}"
            );
        }
        assert_eq!(profile.raw_text, SAMPLE_RESUME);
    }
}

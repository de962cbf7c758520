//! Contact detection: email addresses found in free text, minus generic
//! sender addresses. Used as the optional hook that fills `hr_email`.

use regex::Regex;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Generic sender markers; an address containing any of these is never a
/// usable contact.
pub const GENERIC_SENDER_MARKERS: &[&str] = &["noreply", "no-reply", "donotreply"];

pub struct ContactDetector {
    email: Regex,
}

impl ContactDetector {
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }

    /// First non-generic email in `text`, in document order.
    pub fn first_email(&self, text: &str) -> Option<String> {
        self.email
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .find(|email| !is_generic_sender(email))
    }
}

impl Default for ContactDetector {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_generic_sender(email: &str) -> bool {
    let lowered = email.to_lowercase();
    GENERIC_SENDER_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

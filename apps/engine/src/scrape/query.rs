//! Search-query construction: (skills, location, years) → a listing-search URL.

use crate::models::ExperienceLevel;

const SEARCH_BASE_URL: &str = "https://www.linkedin.com/jobs/search/";

/// Only the first N skills feed the keyword query; the rest are ignored for
/// search purposes (not an error).
pub const MAX_QUERY_SKILLS: usize = 3;

/// A built search query. `level` is `None` when no experience filter applies.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keywords: String,
    pub location: String,
    pub level: Option<ExperienceLevel>,
}

/// Maps (skills, location, experience years) to a query. Deterministic; the
/// years → level table lives on `ExperienceLevel`.
pub fn build(skills: &[String], location: &str, experience_years: Option<u32>) -> SearchQuery {
    let level = experience_years.map(ExperienceLevel::from_years);

    let mut keywords = skills
        .iter()
        .take(MAX_QUERY_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(level) = level {
        if !keywords.is_empty() {
            keywords.push(' ');
        }
        keywords.push_str(level.query_phrase());
    }

    SearchQuery {
        keywords,
        location: location.to_string(),
        level,
    }
}

impl SearchQuery {
    /// Renders the full search URL. Keywords and location are percent-encoded;
    /// the experience facet is appended only when a filter applies.
    pub fn url(&self) -> String {
        let mut url = format!(
            "{SEARCH_BASE_URL}?keywords={}&location={}",
            urlencoding::encode(&self.keywords),
            urlencoding::encode(&self.location),
        );
        if let Some(level) = self.level {
            url.push_str("&f_E=");
            url.push_str(level.facet());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn uses_only_the_first_three_skills() {
        let query = build(
            &skills(&["Python", "React", "SQL", "Docker", "AWS"]),
            "India",
            None,
        );
        assert_eq!(query.keywords, "Python React SQL");
    }

    #[test]
    fn appends_the_level_phrase_when_years_are_given() {
        let query = build(&skills(&["Python"]), "India", Some(4));
        assert_eq!(query.keywords, "Python Associate");
        assert_eq!(query.level, Some(ExperienceLevel::Associate));
    }

    #[test]
    fn absent_years_means_no_filter() {
        let query = build(&skills(&["Python"]), "India", None);
        assert_eq!(query.level, None);
        assert!(!query.url().contains("f_E="));
    }

    #[test]
    fn url_encodes_spaces_in_keywords_and_location() {
        let query = build(&skills(&["Machine Learning"]), "New Delhi", Some(0));
        let url = query.url();
        assert_eq!(
            url,
            "https://www.linkedin.com/jobs/search/\
             ?keywords=Machine%20Learning%20Internship&location=New%20Delhi&f_E=1"
        );
    }

    #[test]
    fn senior_facet_is_appended_for_more_than_five_years() {
        let url = build(&skills(&["Rust"]), "India", Some(8)).url();
        assert!(url.ends_with("&f_E=5,6"));
    }
}

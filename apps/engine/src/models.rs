use serde::{Deserialize, Serialize};

/// Inclusive upper bound of the "Entry" bucket: two years of experience is
/// still Entry, not Associate. This constant is the single authority on that
/// boundary.
pub const ENTRY_MAX_YEARS: u32 = 2;
/// Inclusive upper bound of the "Associate" bucket.
pub const ASSOCIATE_MAX_YEARS: u32 = 5;

/// Coarse seniority bucket derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Internship,
    Entry,
    Associate,
    Senior,
}

impl ExperienceLevel {
    /// The canonical years → level table. Deterministic; an absent years
    /// value means "all levels" and is handled before this is called.
    pub fn from_years(years: u32) -> Self {
        match years {
            0 => ExperienceLevel::Internship,
            y if y <= ENTRY_MAX_YEARS => ExperienceLevel::Entry,
            y if y <= ASSOCIATE_MAX_YEARS => ExperienceLevel::Associate,
            _ => ExperienceLevel::Senior,
        }
    }

    /// Phrase appended to the keyword query.
    pub fn query_phrase(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::Entry => "Entry level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::Senior => "Mid-Senior level",
        }
    }

    /// Value of the listing site's experience facet (`f_E`) for this level.
    pub fn facet(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "1",
            ExperienceLevel::Entry => "1,2",
            ExperienceLevel::Associate => "3,4",
            ExperienceLevel::Senior => "5,6",
        }
    }
}

/// One scraped job posting. Title, company, and apply link are always
/// populated; a card missing any of them is discarded before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_link: String,
    pub hr_email: Option<String>,
    /// `None` when the search was run without an experience filter.
    pub experience_level: Option<ExperienceLevel>,
}

/// Stable-order partition of scraped listings by contact availability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorizedJobs {
    pub direct_contact: Vec<JobListing>,
    pub standard: Vec<JobListing>,
    pub total_jobs: usize,
    pub with_email_count: usize,
    pub without_email_count: usize,
}

/// Structured profile derived from one uploaded resume. Immutable after
/// extraction; an absent field is a normal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Deduplicated, title-cased, sorted (discovery order is not meaningful).
    pub skills: Vec<String>,
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_zero_is_internship() {
        assert_eq!(ExperienceLevel::from_years(0), ExperienceLevel::Internship);
    }

    #[test]
    fn years_one_and_two_are_entry() {
        assert_eq!(ExperienceLevel::from_years(1), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_years(2), ExperienceLevel::Entry);
    }

    #[test]
    fn years_three_to_five_are_associate() {
        for years in 3..=5 {
            assert_eq!(
                ExperienceLevel::from_years(years),
                ExperienceLevel::Associate
            );
        }
    }

    #[test]
    fn years_above_five_are_senior() {
        assert_eq!(ExperienceLevel::from_years(6), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_years(30), ExperienceLevel::Senior);
    }

    #[test]
    fn entry_boundary_is_the_named_constant() {
        // years == 2 counts as Entry, not Associate.
        assert_eq!(
            ExperienceLevel::from_years(ENTRY_MAX_YEARS),
            ExperienceLevel::Entry
        );
        assert_eq!(
            ExperienceLevel::from_years(ENTRY_MAX_YEARS + 1),
            ExperienceLevel::Associate
        );
        assert_eq!(
            ExperienceLevel::from_years(ASSOCIATE_MAX_YEARS + 1),
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn facet_values_follow_the_level() {
        assert_eq!(ExperienceLevel::Internship.facet(), "1");
        assert_eq!(ExperienceLevel::Entry.facet(), "1,2");
        assert_eq!(ExperienceLevel::Associate.facet(), "3,4");
        assert_eq!(ExperienceLevel::Senior.facet(), "5,6");
    }
}

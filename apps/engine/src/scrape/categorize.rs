//! Partition of scraped listings by contact availability. Pure and
//! deterministic; relative order within each side follows input order.

use crate::models::{CategorizedJobs, JobListing};

pub fn categorize(jobs: Vec<JobListing>) -> CategorizedJobs {
    let total_jobs = jobs.len();
    let (direct_contact, standard): (Vec<_>, Vec<_>) =
        jobs.into_iter().partition(|job| job.hr_email.is_some());

    CategorizedJobs {
        with_email_count: direct_contact.len(),
        without_email_count: standard.len(),
        total_jobs,
        direct_contact,
        standard,
    }
}

//! Job List View-Model: derives the render-ready job list from the last
//! fetch and the filter selection.
//!
//! Remote and job-type matching are substring heuristics over free-text
//! titles and locations, not structured fields. False negatives (a
//! full-time role whose title never says so) are expected.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::models::job::Job;

const REMOTE_KEYWORD: &str = "remote";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "intern")]
    Intern,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::All,
        JobType::FullTime,
        JobType::PartTime,
        JobType::Intern,
    ];

    /// Form value, which doubles as the title keyword for filtering.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::All => "all",
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Intern => "intern",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::All => "All Job Types",
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Intern => "Internship",
        }
    }

    fn keyword(&self) -> Option<&'static str> {
        match self {
            JobType::All => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown job type '{s}'"))
    }
}

/// Filter selection from the jobs page. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub remote: bool,
    pub job_type: JobType,
    /// Collected from the form and echoed back, but not applied to the list.
    pub min_salary: String,
}

impl JobFilter {
    /// Applies remote-only, then job type. Input order is preserved.
    /// `min_salary` is not consulted.
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter()
            .filter(|job| !self.remote || is_remote(job))
            .filter(|job| match self.job_type.keyword() {
                Some(keyword) => contains_ci(job.title(), keyword),
                None => true,
            })
            .cloned()
            .collect()
    }
}

fn is_remote(job: &Job) -> bool {
    contains_ci(job.title(), REMOTE_KEYWORD) || contains_ci(job.location(), REMOTE_KEYWORD)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, location: &str) -> Job {
        Job {
            title: Some(title.to_string()),
            location: Some(location.to_string()),
            ..Default::default()
        }
    }

    fn titles(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.title()).collect()
    }

    #[test]
    fn test_default_filter_returns_input_unchanged() {
        let jobs = vec![
            job("B", "Pune"),
            job("A", "Remote"),
            job("B", "Pune"),
            Job::default(),
        ];
        assert_eq!(JobFilter::default().apply(&jobs), jobs);
    }

    #[test]
    fn test_remote_matches_title_or_location() {
        let jobs = vec![
            job("Remote React Dev", "India"),
            job("Backend Engineer", "Remote"),
        ];
        let filter = JobFilter {
            remote: true,
            ..Default::default()
        };
        assert_eq!(filter.apply(&jobs), jobs);
    }

    #[test]
    fn test_remote_excludes_onsite_jobs() {
        let jobs = vec![job("Backend Engineer", "Bengaluru"), job("SRE", "REMOTE - EU")];
        let filter = JobFilter {
            remote: true,
            ..Default::default()
        };
        assert_eq!(titles(&filter.apply(&jobs)), vec!["SRE"]);
    }

    #[test]
    fn test_job_type_matches_title_keyword_only() {
        let jobs = vec![
            job("Full-Time Rust Engineer", "Delhi"),
            job("Rust Engineer", "full-time"),
            job("Summer Intern - Data", "Mumbai"),
            job("Internal Tools Developer", "Pune"),
        ];
        let full_time = JobFilter {
            job_type: JobType::FullTime,
            ..Default::default()
        };
        assert_eq!(titles(&full_time.apply(&jobs)), vec!["Full-Time Rust Engineer"]);

        // "intern" is a plain substring, so "Internal" matches too.
        let intern = JobFilter {
            job_type: JobType::Intern,
            ..Default::default()
        };
        assert_eq!(
            titles(&intern.apply(&jobs)),
            vec!["Summer Intern - Data", "Internal Tools Developer"]
        );
    }

    #[test]
    fn test_remote_and_job_type_compose() {
        let jobs = vec![
            job("Remote Part-time Tutor", "India"),
            job("Part-time Cashier", "Chennai"),
            job("Remote Engineer", "India"),
        ];
        let filter = JobFilter {
            remote: true,
            job_type: JobType::PartTime,
            ..Default::default()
        };
        assert_eq!(titles(&filter.apply(&jobs)), vec!["Remote Part-time Tutor"]);
    }

    #[test]
    fn test_min_salary_is_not_applied() {
        let jobs = vec![
            Job {
                salary: Some("100".to_string()),
                ..job("Cheap", "India")
            },
            job("Unknown", "India"),
        ];
        let filter = JobFilter {
            min_salary: "500000".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&jobs), jobs);
    }

    #[test]
    fn test_job_type_parses_form_values() {
        assert_eq!("full-time".parse::<JobType>(), Ok(JobType::FullTime));
        assert_eq!("ALL".parse::<JobType>(), Ok(JobType::All));
        assert!("contract".parse::<JobType>().is_err());
    }
}

use serde::{Deserialize, Serialize};

use crate::models::string_or_number;

/// A single job listing as returned by `GET /search_jobs`.
/// Every field is optional on the wire; the portal never mutates a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub via: Option<String>,
}

impl Job {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// `apply_link` wins over `url`; blank values count as absent.
    pub fn apply_url(&self) -> Option<&str> {
        [self.apply_link.as_deref(), self.url.as_deref()]
            .into_iter()
            .flatten()
            .find(|u| !u.trim().is_empty())
    }
}

/// Body of `GET /search_jobs`. A response without `jobs` is an empty result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::error;

use crate::api_client::CareerApi;
use crate::jobs::{JobFilter, JobType};
use crate::models::job::Job;
use crate::models::user::User;
use crate::pages::layout::{attr, render_page, text};
use crate::state::AppState;

pub const DEFAULT_QUERY: &str = "React Developer";
pub const DEFAULT_LOCATION: &str = "India";

/// Query string of `GET /jobs`. Every field is optional; a request without
/// `query` renders the search form without fetching.
#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub query: Option<String>,
    pub location: Option<String>,
    pub remote: Option<String>,
    pub job_type: Option<String>,
    pub min_salary: Option<String>,
}

impl JobsQuery {
    pub fn filter(&self) -> JobFilter {
        JobFilter {
            remote: self.remote.as_deref().is_some_and(is_checked),
            job_type: self
                .job_type
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or_default(),
            min_salary: self.min_salary.clone().unwrap_or_default(),
        }
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1")
}

/// Runs a job search, collapsing any failure into an empty result.
/// Failure and "no results" look the same to the user; the cause is logged.
pub async fn fetch_jobs_or_empty(api: &dyn CareerApi, query: &str, location: &str) -> Vec<Job> {
    match api.search_jobs(query, location).await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!("Error fetching jobs for {query:?} in {location:?}: {e}");
            vec![]
        }
    }
}

/// GET /jobs
pub async fn handle_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Html<String> {
    let user = state.session.load();
    let filter = params.filter();
    let location = params.location.as_deref().unwrap_or(DEFAULT_LOCATION);

    let jobs = match params.query.as_deref() {
        Some(query) => {
            let fetched = fetch_jobs_or_empty(state.api.as_ref(), query, location).await;
            filter.apply(&fetched)
        }
        None => vec![],
    };

    let query = params.query.as_deref().unwrap_or(DEFAULT_QUERY);
    Html(render_jobs(user.as_ref(), query, location, &filter, &jobs))
}

pub fn render_job_card(job: &Job) -> String {
    let mut meta = String::new();
    if let Some(company) = job.company.as_deref() {
        meta.push_str(&format!(r#"<p class="company">{}</p>"#, text(company)));
    }
    if !job.location().is_empty() {
        meta.push_str(&format!(r#"<p class="muted">{}</p>"#, text(job.location())));
    }
    if let Some(salary) = job.salary.as_deref() {
        meta.push_str(&format!(r#"<p>Salary: {}</p>"#, text(salary)));
    }
    if let Some(kind) = job.job_type.as_deref() {
        meta.push_str(&format!(r#"<p>{}</p>"#, text(kind)));
    }

    let logo = job
        .logo
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="" width="40" height="40">"#, attr(src)))
        .unwrap_or_default();
    let via = job
        .via
        .as_deref()
        .map(|v| format!(r#"<span class="muted">via {}</span>"#, text(v)))
        .unwrap_or_default();
    let apply = job
        .apply_url()
        .map(|href| {
            format!(
                r#"<a class="button apply" href="{}" target="_blank" rel="noreferrer">Apply Now</a>"#,
                attr(href)
            )
        })
        .unwrap_or_default();

    let title = if job.title().is_empty() {
        "Untitled role"
    } else {
        job.title()
    };

    format!(
        r#"<div class="card job">{logo}<h3>{}</h3>{meta}<div class="footer">{via} {apply}</div></div>"#,
        text(title)
    )
}

pub fn render_no_jobs() -> String {
    r#"<div class="card no-jobs"><p><strong>No jobs found</strong></p><p class="muted">Try adjusting your search query, location, or filtering options.</p></div>"#
        .to_string()
}

pub fn render_job_grid(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return render_no_jobs();
    }
    let cards: String = jobs.iter().map(render_job_card).collect();
    format!(r#"<div class="grid">{cards}</div>"#)
}

fn render_filter_bar(filter: &JobFilter) -> String {
    let options: String = JobType::ALL
        .iter()
        .map(|t| {
            let selected = if *t == filter.job_type { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, t.as_str(), t.label())
        })
        .collect();
    let remote = if filter.remote { " checked" } else { "" };

    format!(
        r#"<div class="card filters">
<label><input type="checkbox" name="remote" value="true"{remote}> Remote only</label>
<label>Job type <select name="job_type">{options}</select></label>
<label>Min salary <input type="number" name="min_salary" value="{}" placeholder="Min salary"></label>
</div>"#,
        attr(&filter.min_salary)
    )
}

pub fn render_jobs(
    user: Option<&User>,
    query: &str,
    location: &str,
    filter: &JobFilter,
    jobs: &[Job],
) -> String {
    let body = format!(
        r#"<h1>CareerPilot Job Search</h1>
<form method="get" action="/jobs">
<div class="card search">
<input type="text" name="query" value="{}" placeholder="Search for a job title...">
<input type="text" name="location" value="{}" placeholder="Location">
<button class="button" type="submit">Search</button>
</div>
{}
</form>
{}"#,
        attr(query),
        attr(location),
        render_filter_bar(filter),
        render_job_grid(jobs),
    );
    render_page("Jobs", user, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_filter_reads_checkbox_and_type() {
        let params = JobsQuery {
            remote: Some("on".to_string()),
            job_type: Some("part-time".to_string()),
            min_salary: Some("30000".to_string()),
            ..Default::default()
        };
        let filter = params.filter();
        assert!(filter.remote);
        assert_eq!(filter.job_type, JobType::PartTime);
        assert_eq!(filter.min_salary, "30000");
    }

    #[test]
    fn test_unknown_job_type_falls_back_to_all() {
        let params = JobsQuery {
            job_type: Some("contract".to_string()),
            ..Default::default()
        };
        assert_eq!(params.filter().job_type, JobType::All);
    }

    #[test]
    fn test_job_card_escapes_and_links() {
        let job = Job {
            title: Some("<b>Rust</b> Dev".to_string()),
            apply_link: Some("https://apply.example/?a=1&b=2".to_string()),
            ..Default::default()
        };
        let html = render_job_card(&job);
        assert!(html.contains("&lt;b&gt;Rust&lt;/b&gt; Dev"));
        assert!(html.contains(r#"href="https://apply.example/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_empty_grid_shows_no_jobs_message() {
        assert!(render_job_grid(&[]).contains("No jobs found"));
    }

    #[test]
    fn test_min_salary_is_echoed_back() {
        let filter = JobFilter {
            min_salary: "45000".to_string(),
            ..Default::default()
        };
        let html = render_jobs(None, DEFAULT_QUERY, DEFAULT_LOCATION, &filter, &[]);
        assert!(html.contains(r#"name="min_salary" value="45000""#));
    }
}

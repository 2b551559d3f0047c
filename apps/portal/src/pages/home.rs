use axum::{extract::State, response::Html};

use crate::models::job::Job;
use crate::models::user::User;
use crate::pages::jobs::{fetch_jobs_or_empty, render_job_grid};
use crate::pages::layout::{render_page, text};
use crate::state::AppState;

const HOME_QUERY: &str = "Developer";
const HOME_LOCATION: &str = "India";
const MAX_HOME_JOBS: usize = 30;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "Resume Optimization",
        "Build a polished resume from a clean template and keep it up to date.",
        "/resume",
    ),
    (
        "Job Search",
        "Explore live job listings tailored to your skills, salary expectations, and location.",
        "/jobs",
    ),
    (
        "Skill Assessment",
        "Test and improve your skills with our smart evaluation tools.",
        "/skills",
    ),
];

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    let user = state.session.load();
    let mut jobs = fetch_jobs_or_empty(state.api.as_ref(), HOME_QUERY, HOME_LOCATION).await;
    jobs.truncate(MAX_HOME_JOBS);
    Html(render_home(user.as_ref(), &jobs))
}

pub fn render_home(user: Option<&User>, jobs: &[Job]) -> String {
    let greeting = match user.filter(|u| !u.name.trim().is_empty()) {
        Some(user) => format!(
            "<p>Welcome, {}! Explore your personalized career tools.</p>",
            text(&user.name)
        ),
        None => {
            "<p>Welcome! Explore live jobs, build your resume, and grow your career.</p>".to_string()
        }
    };

    let features: String = FEATURES
        .iter()
        .map(|(title, blurb, link)| {
            format!(
                r#"<div class="card feature"><h2>{title}</h2><p>{blurb}</p><a class="button" href="{link}">Explore</a></div>"#
            )
        })
        .collect();

    let body = format!(
        r#"<h1>CareerPilot</h1>
{greeting}
<div class="grid">{features}</div>
<h2>Latest Jobs</h2>
{}"#,
        render_job_grid(jobs)
    );
    render_page("Home", user, &body)
}

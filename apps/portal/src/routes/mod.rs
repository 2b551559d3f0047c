pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::pages::{home, jobs, login, mock, not_found, profile, resume, signup, skills};
use crate::state::AppState;

/// The single route table. Every page is open-access; `/profile` renders a
/// login prompt itself when no session is present.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(home::handle_home))
        .route("/jobs", get(jobs::handle_jobs))
        .route("/resume", get(resume::handle_resume))
        .route("/mock", get(mock::handle_mock))
        .route("/skills", get(skills::handle_skills))
        .route(
            "/signup",
            get(signup::handle_signup_page).post(signup::handle_signup),
        )
        .route(
            "/login",
            get(login::handle_login_page).post(login::handle_login),
        )
        .route("/profile", get(profile::handle_profile))
        // Session actions
        .route("/logout", post(login::handle_logout))
        .route("/profile/skills", post(profile::handle_update_profile))
        .route(
            "/profile/resume",
            post(profile::handle_upload_resume)
                .layer(DefaultBodyLimit::max(profile::MAX_RESUME_BYTES)),
        )
        .fallback(not_found::handle_not_found)
        .with_state(state)
}

use std::borrow::Cow;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::api_client::ResumeUpload;
use crate::errors::AppError;
use crate::models::user::User;
use crate::pages::layout::{attr, render_alerts, render_page, text, Alert};
use crate::resume::{extract_skills_from_pdf, merge_skills};
use crate::state::AppState;

pub const LOGIN_REQUIRED: &str = "Please login to view your profile.";

/// Largest resume body accepted on `/profile/resume`.
pub const MAX_RESUME_BYTES: usize = 16 * 1024 * 1024;
pub const RESUME_TOO_LARGE: &str = "File too large (limit 16MB)";

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: String,
}

/// GET /profile
pub async fn handle_profile(State(state): State<AppState>) -> Html<String> {
    let user = state.session.load();
    Html(render_profile(user.as_ref(), &[]))
}

/// POST /profile/skills
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let Some(mut user) = state.session.load() else {
        return Ok(Html(render_profile(None, &[])).into_response());
    };

    user.email = non_blank(form.email);
    user.skills = non_blank(form.skills);
    state.session.save(&user)?;
    Ok(Redirect::to("/profile").into_response())
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// POST /profile/resume
///
/// Forwards the file to the API and shows its message verbatim. PDF resumes
/// are also scanned locally; any skills found are merged into the session
/// user so the skills page reflects them.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let Some(mut user) = state.session.load() else {
        return Ok(Html(render_profile(None, &[])));
    };

    let mut upload: Option<ResumeUpload> = None;
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if !matches!(field.name(), Some("file") | Some("resume")) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(upload_error)?;
        upload = Some(ResumeUpload {
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    let Some(upload) = upload.filter(|u| !u.file_name.is_empty() && !u.bytes.is_empty()) else {
        let alerts = [Alert::error("Choose a resume file to upload.")];
        return Ok(Html(render_profile(Some(&user), &alerts)));
    };

    let is_pdf = upload.file_name.to_lowercase().ends_with(".pdf");
    let bytes = upload.bytes.clone();

    // Users created by signup alone carry no id; fall back to the name.
    let user_id = user.id.clone().unwrap_or_else(|| user.name.clone());
    let token = state.session.token();
    let message = match state
        .api
        .upload_resume(&user_id, token.as_deref(), upload)
        .await
    {
        Ok(message) => message,
        Err(e) => {
            warn!("Resume upload failed: {e}");
            let alerts = [Alert::error(e.user_message())];
            return Ok(Html(render_profile(Some(&user), &alerts)));
        }
    };
    let mut alerts = vec![Alert::info(message)];

    if is_pdf {
        let found = scan_resume(bytes).await;
        if !found.is_empty() {
            user.skills = merge_skills(user.skills_text(), &found);
            state.session.save(&user)?;
            info!("Merged {} resume skills into profile", found.len());
            alerts.push(Alert::success(format!(
                "Skills found in your resume: {}",
                found.join(", ")
            )));
        }
    }

    Ok(Html(render_profile(Some(&user), &alerts)))
}

fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(RESUME_TOO_LARGE.to_string())
    } else {
        AppError::Validation(format!("Malformed upload: {e}"))
    }
}

/// Runs PDF extraction off the async runtime. Unreadable PDFs yield no skills.
async fn scan_resume(bytes: Bytes) -> Vec<&'static str> {
    match tokio::task::spawn_blocking(move || extract_skills_from_pdf(&bytes)).await {
        Ok(Ok(skills)) => skills,
        Ok(Err(e)) => {
            warn!("Resume skill scan skipped: {e}");
            vec![]
        }
        Err(e) => {
            warn!("Resume skill scan aborted: {e}");
            vec![]
        }
    }
}

fn or_not_provided(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        Cow::Borrowed("Not provided")
    } else {
        text(value)
    }
}

pub fn render_profile(user: Option<&User>, alerts: &[Alert]) -> String {
    let Some(user) = user else {
        let body = format!(r#"<p class="card notice">{LOGIN_REQUIRED}</p>"#);
        return render_page("Profile", None, &body);
    };

    let email = user.email.as_deref().unwrap_or("");
    let skills = user.skills.as_deref().unwrap_or("");

    let body = format!(
        r#"<div class="card profile">
<h2>Profile</h2>
{alerts}
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email_text}</p>
<p><strong>Skills:</strong> {skills_text}</p>
<h3>Edit details</h3>
<form method="post" action="/profile/skills">
<label>Email <input type="email" name="email" value="{email_attr}"></label>
<label>Skills (comma-separated) <input type="text" name="skills" value="{skills_attr}"></label>
<button class="button" type="submit">Save</button>
</form>
<h3>Upload Resume</h3>
<form method="post" action="/profile/resume" enctype="multipart/form-data">
<input type="file" name="file" accept=".pdf,.doc,.docx">
<button class="button" type="submit">Upload</button>
</form>
</div>"#,
        alerts = render_alerts(alerts),
        name = text(&user.name),
        email_text = or_not_provided(email),
        skills_text = or_not_provided(skills),
        email_attr = attr(email),
        skills_attr = attr(skills),
    );
    render_page("Profile", Some(user), &body)
}

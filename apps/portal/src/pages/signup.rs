use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{info, warn};

use crate::api_client::SignupForm;
use crate::errors::AppError;
use crate::models::user::User;
use crate::pages::layout::{attr, render_alerts, render_page, Alert};
use crate::state::AppState;

/// GET /signup
pub async fn handle_signup_page(State(state): State<AppState>) -> Html<String> {
    let user = state.session.load();
    Html(render_signup(user.as_ref(), "", "", &[]))
}

/// POST /signup
///
/// On success the username is stored as the session user and the browser is
/// sent to /login. On failure the form is shown again with the server's
/// message and no navigation happens.
pub async fn handle_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    match state.api.signup(&form).await {
        Ok(reply) => {
            if let Some(message) = reply.message.as_deref() {
                info!("Signup reply: {message}");
            }
            let name = reply
                .username
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| form.username.clone());
            state.session.save(&User::named(name))?;
            info!("Signup succeeded for '{}'", form.username);
            Ok(Redirect::to("/login?signed_up=true").into_response())
        }
        Err(e) => {
            warn!("Signup failed for '{}': {e}", form.username);
            let user = state.session.load();
            let alerts = [Alert::error(e.user_message())];
            Ok(Html(render_signup(user.as_ref(), &form.username, &form.email, &alerts)).into_response())
        }
    }
}

pub fn render_signup(user: Option<&User>, username: &str, email: &str, alerts: &[Alert]) -> String {
    let body = format!(
        r#"<div class="card auth">
<h2>Signup</h2>
{}
<form method="post" action="/signup">
<label>Username <input type="text" name="username" value="{}" required></label>
<label>Email <input type="email" name="email" value="{}" required></label>
<label>Password <input type="password" name="password" required></label>
<button class="button" type="submit">Create account</button>
</form>
<p class="muted">Already have an account? <a href="/login">Log in</a></p>
</div>"#,
        render_alerts(alerts),
        attr(username),
        attr(email),
    );
    render_page("Signup", user, &body)
}

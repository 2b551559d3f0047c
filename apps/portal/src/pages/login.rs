use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::api_client::Credentials;
use crate::errors::AppError;
use crate::models::user::User;
use crate::pages::layout::{attr, render_alerts, render_page, Alert};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub signed_up: bool,
}

/// GET /login
pub async fn handle_login_page(
    State(state): State<AppState>,
    Query(params): Query<LoginQuery>,
) -> Html<String> {
    let user = state.session.load();
    let mut alerts = Vec::new();
    if params.signed_up {
        alerts.push(Alert::success("Signup successful! Please log in."));
    }
    Html(render_login(user.as_ref(), "", &alerts))
}

/// POST /login
///
/// Replaces whatever user was stored with the identity the API returns and
/// stores the bearer token beside it.
pub async fn handle_login(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> Result<Response, AppError> {
    match state.api.login(&credentials).await {
        Ok(reply) => {
            let user = User {
                id: reply.user.id,
                name: reply.user.username,
                email: None,
                skills: None,
            };
            state.session.save(&user)?;
            state.session.save_token(&reply.token)?;
            info!("Logged in as '{}'", user.name);
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            warn!("Login failed for '{}': {e}", credentials.username);
            let user = state.session.load();
            let alerts = [Alert::error(e.user_message())];
            Ok(Html(render_login(user.as_ref(), &credentials.username, &alerts)).into_response())
        }
    }
}

/// POST /logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.session.clear()?;
    Ok(Redirect::to("/"))
}

pub fn render_login(user: Option<&User>, username: &str, alerts: &[Alert]) -> String {
    let body = format!(
        r#"<div class="card auth">
<h2>Login</h2>
{}
<form method="post" action="/login">
<label>Username <input type="text" name="username" value="{}" required></label>
<label>Password <input type="password" name="password" required></label>
<button class="button" type="submit">Log in</button>
</form>
<p class="muted">New here? <a href="/signup">Create an account</a></p>
</div>"#,
        render_alerts(alerts),
        attr(username),
    );
    render_page("Login", user, &body)
}

//! Page shell: document head, navbar, alerts, and HTML escaping helpers
//! shared by every page.

use std::borrow::Cow;

use axum::http::StatusCode;

use crate::models::user::User;

const STYLE: &str = r#"
body { margin: 0; background: #121212; color: #e0e0e0; font-family: Arial, sans-serif; }
nav { background: #1f1f1f; display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; }
nav h2 { color: #1e90ff; margin: 0; }
nav .links { display: flex; gap: 18px; align-items: center; }
nav a { color: #e0e0e0; text-decoration: none; padding: 8px 14px; border-radius: 6px; }
nav form { margin: 0; }
main { max-width: 1100px; margin: 0 auto; padding: 32px 24px; }
h1, h2, h3 { color: #1e90ff; }
.card { background: #1f1f1f; border-radius: 12px; padding: 20px; margin-bottom: 16px; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px; }
.alert { border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; }
.alert.error { background: #4a1c1c; color: #ffb3b3; }
.alert.success { background: #1c4a2a; color: #b3ffcc; }
.alert.info { background: #1c2f4a; color: #b3d7ff; }
.button { background: #1e90ff; color: #fff; border: none; border-radius: 6px; padding: 8px 16px; text-decoration: none; cursor: pointer; }
.button.danger { background: #e74c3c; }
.button.apply { background: #38a169; }
input, select, textarea { background: #2d3748; color: #e2e8f0; border: 1px solid #4a5568; border-radius: 6px; padding: 8px; }
label { display: block; margin: 8px 0; }
.muted { color: #a0aec0; }
"#;

/// Escapes text for element content.
pub fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes text for a double-quoted attribute value.
pub fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }
}

/// A message shown at the top of a page in place of a browser alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="alert {}" role="alert">{}</div>"#,
            self.kind.class(),
            text(&self.message)
        )
    }
}

pub fn render_alerts(alerts: &[Alert]) -> String {
    alerts.iter().map(Alert::render).collect()
}

fn render_navbar(user: Option<&User>) -> String {
    let mut links = String::from(
        r#"<a href="/">Home</a><a href="/jobs">Jobs</a><a href="/resume">Resume</a><a href="/mock">Mock</a><a href="/skills">Skills</a>"#,
    );
    if user.is_some() {
        links.push_str(
            r#"<a href="/profile">Profile</a><form method="post" action="/logout"><button class="button danger" type="submit">Logout</button></form>"#,
        );
    } else {
        links.push_str(r#"<a href="/login">Login</a><a href="/signup">Signup</a>"#);
    }
    format!(r#"<nav><h2>CareerPilot</h2><div class="links">{links}</div></nav>"#)
}

/// Wraps `body` in the full document with the navbar for `user`.
pub fn render_page(title: &str, user: Option<&User>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · CareerPilot</title>
<style>{STYLE}</style>
</head>
<body>
{nav}
<main>
{body}
</main>
</body>
</html>
"#,
        title = text(title),
        nav = render_navbar(user),
    )
}

pub fn render_error(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<div class="card"><h1>{}</h1><p>{}</p><a class="button" href="/">Back to home</a></div>"#,
        text(heading),
        text(message)
    );
    render_page(heading, None, &body)
}

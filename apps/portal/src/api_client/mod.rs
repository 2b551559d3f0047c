/// API Client: the single point of entry for all calls to the remote
/// CareerPilot API.
///
/// No other module may build requests against the API directly; pages go
/// through `CareerApi` so tests can swap in a fake.
///
/// Calls are single-shot: no timeout, no retry, no cancellation. Callers
/// decide how a failure is shown.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{multipart, Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::job::{Job, JobSearchResponse};

pub const SIGNUP_FAILED: &str = "Signup failed";
pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const UPLOAD_FAILED: &str = "Resume upload failed";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` is the server's
    /// own `error` string when it sent one, otherwise a generic fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            _ => "Server error. Please try again later.".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SignupResponse {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginUser {
    #[serde(default, deserialize_with = "crate::models::string_or_number")]
    pub id: Option<String>,
    pub username: String,
}

/// A resume file on its way to `POST /upload_resume/{id}`.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorText,
}

/// The API sends `{"error": "text"}`; some proxies wrap it as
/// `{"error": {"message": "text"}}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorText {
    Plain(String),
    Nested { message: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait CareerApi: Send + Sync {
    async fn signup(&self, form: &SignupForm) -> Result<SignupResponse, ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Jobs for `query` in `location`. A response without a `jobs` field is
    /// an empty result, not an error.
    async fn search_jobs(&self, query: &str, location: &str) -> Result<Vec<Job>, ApiError>;

    /// Returns the server's message verbatim. A non-2xx reply becomes
    /// `ApiError::Rejected` carrying the same text.
    async fn upload_resume(
        &self,
        user_id: &str,
        token: Option<&str>,
        upload: ResumeUpload,
    ) -> Result<String, ApiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpCareerApi: reqwest-backed implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HttpCareerApi {
    client: Client,
    base_url: String,
}

impl HttpCareerApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-2xx response into `ApiError::Rejected`, preferring the
/// server-provided error text over `fallback`.
async fn reject(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|b| match b.error {
            ErrorText::Plain(s) => s,
            ErrorText::Nested { message } => message,
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    warn!("API rejected request with {status}: {message}");
    ApiError::Rejected { status, message }
}

#[async_trait]
impl CareerApi for HttpCareerApi {
    async fn signup(&self, form: &SignupForm) -> Result<SignupResponse, ApiError> {
        let response = self.client.post(self.url("/signup")).json(form).send().await?;

        if !response.status().is_success() {
            return Err(reject(response, SIGNUP_FAILED).await);
        }

        let body = response.text().await?;
        debug!("Signup succeeded for '{}'", form.username);
        if body.trim().is_empty() {
            return Ok(SignupResponse::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(reject(response, LOGIN_FAILED).await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn search_jobs(&self, query: &str, location: &str) -> Result<Vec<Job>, ApiError> {
        let response = self
            .client
            .get(self.url("/search_jobs"))
            .query(&[("query", query), ("location", location)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        // Error bodies carry no `jobs` key and therefore read as empty.
        let parsed: JobSearchResponse = serde_json::from_str(&body)?;
        debug!(
            "search_jobs query={query:?} location={location:?} status={} jobs={}",
            status.as_u16(),
            parsed.jobs.len()
        );
        Ok(parsed.jobs)
    }

    async fn upload_resume(
        &self,
        user_id: &str,
        token: Option<&str>,
        upload: ResumeUpload,
    ) -> Result<String, ApiError> {
        let mut part = multipart::Part::stream(upload.bytes).file_name(upload.file_name);
        if let Some(mime) = upload.content_type.as_deref() {
            part = part.mime_str(mime)?;
        }
        let form = multipart::Form::new().part("file", part);

        let path = format!("/upload_resume/{}", urlencoding::encode(user_id));
        let mut request = self.client.post(self.url(&path)).multipart(form);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed: MessageBody = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UPLOAD_FAILED.to_string());

        if !status.is_success() {
            warn!("API rejected resume upload with {status}: {message}");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::{Multipart, Path, Query},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;

    use super::*;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn signup_form() -> SignupForm {
        SignupForm {
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_without_jobs_key_is_empty() {
        let base = spawn_stub(Router::new().route("/search_jobs", get(|| async { Json(json!({})) }))).await;
        let jobs = HttpCareerApi::new(base).search_jobs("rust", "India").await.unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status_reads_as_empty() {
        let router = Router::new().route(
            "/search_jobs",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "RapidAPI fetch failed"})),
                )
            }),
        );
        let base = spawn_stub(router).await;
        let jobs = HttpCareerApi::new(base).search_jobs("rust", "India").await.unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_both_parameters_encoded() {
        let router = Router::new().route(
            "/search_jobs",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({"jobs": [{
                    "title": params.get("query"),
                    "location": params.get("location"),
                    "apply_link": "https://apply.example/1",
                    "via": "RapidAPI"
                }]}))
            }),
        );
        let base = spawn_stub(router).await;
        let jobs = HttpCareerApi::new(format!("{base}/"))
            .search_jobs("C++ & Rust dev", "São Paulo")
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title(), "C++ & Rust dev");
        assert_eq!(jobs[0].location(), "São Paulo");
    }

    #[tokio::test]
    async fn test_search_network_failure_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = HttpCareerApi::new(format!("http://{addr}"))
            .search_jobs("rust", "India")
            .await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }

    #[tokio::test]
    async fn test_signup_rejection_surfaces_server_message() {
        let router = Router::new().route(
            "/signup",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "email exists"}))) }),
        );
        let base = spawn_stub(router).await;
        let err = HttpCareerApi::new(base).signup(&signup_form()).await.unwrap_err();
        match &err {
            ApiError::Rejected { status, message } => {
                assert_eq!(*status, 400);
                assert_eq!(message, "email exists");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(err.user_message(), "email exists");
    }

    #[tokio::test]
    async fn test_signup_rejection_without_message_uses_fallback() {
        let router = Router::new().route("/signup", post(|| async { StatusCode::CONFLICT }));
        let base = spawn_stub(router).await;
        let err = HttpCareerApi::new(base).signup(&signup_form()).await.unwrap_err();
        assert_eq!(err.user_message(), SIGNUP_FAILED);
    }

    #[tokio::test]
    async fn test_signup_posts_form_and_parses_reply() {
        let router = Router::new().route(
            "/signup",
            post(|Json(body): Json<SignupForm>| async move {
                (StatusCode::CREATED, Json(json!({"username": body.username})))
            }),
        );
        let base = spawn_stub(router).await;
        let reply = HttpCareerApi::new(base).signup(&signup_form()).await.unwrap();
        assert_eq!(reply.username.as_deref(), Some("asha"));
    }

    #[tokio::test]
    async fn test_login_parses_token_and_numeric_id() {
        let router = Router::new().route(
            "/login",
            post(|| async { Json(json!({"token": "jwt-1", "user": {"id": 7, "username": "asha"}})) }),
        );
        let base = spawn_stub(router).await;
        let reply = HttpCareerApi::new(base)
            .login(&Credentials {
                username: "asha".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(reply.token, "jwt-1");
        assert_eq!(reply.user.id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_login_rejection_uses_server_message() {
        let router = Router::new().route(
            "/login",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))) }),
        );
        let base = spawn_stub(router).await;
        let err = HttpCareerApi::new(base)
            .login(&Credentials {
                username: "asha".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_upload_resume_sends_file_field_and_returns_message() {
        let router = Router::new().route(
            "/upload_resume/:id",
            post(
                |Path(id): Path<String>, headers: HeaderMap, mut multipart: Multipart| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    let mut summary = String::new();
                    while let Some(field) = multipart.next_field().await.unwrap() {
                        let name = field.name().unwrap_or("").to_string();
                        let file_name = field.file_name().unwrap_or("").to_string();
                        let len = field.bytes().await.unwrap().len();
                        summary = format!("{name}:{file_name}:{len}");
                    }
                    Json(json!({"message": format!("{id}|{auth}|{summary}")}))
                },
            ),
        );
        let base = spawn_stub(router).await;
        let message = HttpCareerApi::new(base)
            .upload_resume(
                "42",
                Some("jwt-1"),
                ResumeUpload {
                    file_name: "cv.pdf".to_string(),
                    content_type: Some("application/pdf".to_string()),
                    bytes: Bytes::from_static(b"%PDF-1.4 fake"),
                },
            )
            .await
            .unwrap();
        assert_eq!(message, "42|Bearer jwt-1|file:cv.pdf:13");
    }

    #[tokio::test]
    async fn test_upload_resume_error_body_is_surfaced() {
        let router = Router::new().route(
            "/upload_resume/:id",
            post(|| async {
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    Json(json!({"error": "Only PDF files allowed"})),
                )
            }),
        );
        let base = spawn_stub(router).await;
        let err = HttpCareerApi::new(base)
            .upload_resume(
                "42",
                None,
                ResumeUpload {
                    file_name: "cv.docx".to_string(),
                    content_type: None,
                    bytes: Bytes::from_static(b"doc"),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 415, .. }));
        assert_eq!(err.user_message(), "Only PDF files allowed");
    }

    #[tokio::test]
    async fn test_upload_resume_unauthorized_is_rejected() {
        let router = Router::new().route(
            "/upload_resume/:id",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": "Missing Authorization Header"})),
                )
            }),
        );
        let base = spawn_stub(router).await;
        let err = HttpCareerApi::new(base)
            .upload_resume(
                "42",
                None,
                ResumeUpload {
                    file_name: "cv.pdf".to_string(),
                    content_type: Some("application/pdf".to_string()),
                    bytes: Bytes::from_static(b"%PDF-1.4 fake"),
                },
            )
            .await
            .unwrap_err();
        match &err {
            ApiError::Rejected { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message, "Missing Authorization Header");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_resume_rejection_without_body_uses_fallback() {
        let router = Router::new().route(
            "/upload_resume/:id",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_stub(router).await;
        let err = HttpCareerApi::new(base)
            .upload_resume(
                "42",
                None,
                ResumeUpload {
                    file_name: "cv.pdf".to_string(),
                    content_type: None,
                    bytes: Bytes::from_static(b"%PDF"),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), UPLOAD_FAILED);
    }

    #[test]
    fn test_nested_error_shape_is_understood() {
        let body: ErrorBody = serde_json::from_value(json!({"error": {"message": "nope"}})).unwrap();
        assert!(matches!(body.error, ErrorText::Nested { ref message } if message == "nope"));
    }
}

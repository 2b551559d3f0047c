use std::sync::Arc;

use crate::api_client::CareerApi;
use crate::session::SessionStore;

/// Shared state injected into all page handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable API client. Default: `HttpCareerApi`; tests use a fake.
    pub api: Arc<dyn CareerApi>,
    pub session: SessionStore,
}

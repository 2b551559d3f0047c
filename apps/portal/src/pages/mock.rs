use axum::{extract::State, response::Html};

use crate::pages::layout::render_page;
use crate::state::AppState;

const PRAMP_URL: &str = "https://www.pramp.com/";

/// GET /mock
pub async fn handle_mock(State(state): State<AppState>) -> Html<String> {
    let user = state.session.load();
    let body = format!(
        r#"<div class="card"><h2>Mock Interviews</h2>
<p>Practice real-time interviews with peers and improve your confidence.</p>
<a class="button" href="{PRAMP_URL}" target="_blank" rel="noreferrer">Start on Pramp</a></div>"#
    );
    Html(render_page("Mock Interviews", user.as_ref(), &body))
}

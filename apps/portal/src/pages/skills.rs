use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::models::skill::SkillLink;
use crate::models::user::User;
use crate::pages::layout::{attr, render_page, text};
use crate::skills::catalog::{CATEGORIES, TRENDING_SKILLS};
use crate::skills::explore::{course_search_url, suggest, Platform};
use crate::skills::{missing_skills, IN_DEMAND_SKILLS};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// GET /skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillsQuery>,
) -> Html<String> {
    let user = state.session.load();
    let platform = params
        .platform
        .as_deref()
        .and_then(|p| p.parse().ok())
        .unwrap_or_default();
    Html(render_skills(user.as_ref(), &params.q, platform))
}

fn render_links(links: &[SkillLink]) -> String {
    links
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noreferrer">{}</a></li>"#,
                attr(s.url),
                text(s.name)
            )
        })
        .collect()
}

fn render_suggested(user: Option<&User>) -> String {
    // Recommendations need a profile to compare against.
    let Some(user) = user else {
        return String::new();
    };
    let missing = missing_skills(user.skills_text(), IN_DEMAND_SKILLS);
    if missing.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="card suggested"><h2>Suggested For You</h2><ul>{}</ul></div>"#,
        render_links(&missing)
    )
}

fn render_search(query: &str, platform: Platform) -> String {
    let options: String = Platform::ALL
        .iter()
        .map(|p| {
            let selected = if *p == platform { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, p.as_str(), p.label())
        })
        .collect();

    let suggestions: String = suggest(query)
        .into_iter()
        .map(|s| {
            let href = format!(
                "/skills?q={}&platform={}",
                urlencoding::encode(s),
                platform.as_str()
            );
            format!(r#"<li><a href="{}">{}</a></li>"#, attr(&href), text(s))
        })
        .collect();
    let suggestions = if suggestions.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="suggestions">{suggestions}</ul>"#)
    };

    let course_link = course_search_url(platform, query)
        .map(|url| {
            format!(
                r#"<p><a class="button" href="{}" target="_blank" rel="noreferrer">Search "{}" on {}</a></p>"#,
                attr(&url),
                text(query.trim()),
                platform.label()
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card"><h2>Skill Development</h2>
<form method="get" action="/skills">
<input type="text" name="q" value="{}" placeholder="Search for a skill...">
<select name="platform">{options}</select>
<button class="button" type="submit">Search</button>
</form>
{suggestions}
{course_link}
</div>"#,
        attr(query)
    )
}

pub fn render_skills(user: Option<&User>, query: &str, platform: Platform) -> String {
    let categories: String = CATEGORIES
        .iter()
        .map(|c| {
            format!(
                r#"<div class="card"><h3>{}</h3><ul>{}</ul></div>"#,
                text(c.name),
                render_links(c.skills)
            )
        })
        .collect();

    let body = format!(
        r#"{}
{}
<h2>Categories</h2>
<div class="grid">{categories}</div>
<div class="card"><h2>Trending Skills</h2><ul>{}</ul></div>"#,
        render_suggested(user),
        render_search(query, platform),
        render_links(TRENDING_SKILLS),
    );
    render_page("Skills", user, &body)
}

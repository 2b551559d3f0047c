use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::debug;

use crate::models::user::User;
use crate::pages::layout::{render_page, text};
use crate::resume::builder::ResumeEntry;
use crate::resume::{Palette, ResumeDocument, ResumeOptions, Template};
use crate::state::AppState;

/// Raw /resume query. Each value is parsed on its own so one bad value
/// does not discard the others.
#[derive(Debug, Default, Deserialize)]
pub struct ResumeQuery {
    pub template: Option<String>,
    pub palette: Option<String>,
    pub dark: Option<String>,
}

impl ResumeQuery {
    pub fn options(&self) -> ResumeOptions {
        ResumeOptions {
            template: parse_or_default(self.template.as_deref()),
            palette: parse_or_default(self.palette.as_deref()),
            dark: self.dark.as_deref().is_some_and(|d| {
                matches!(d.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1")
            }),
        }
    }
}

fn parse_or_default<T>(value: Option<&str>) -> T
where
    T: std::str::FromStr<Err = String> + Default,
{
    match value.map(str::parse::<T>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(e)) => {
            debug!("Ignoring resume option: {e}");
            T::default()
        }
        None => T::default(),
    }
}

/// GET /resume
///
/// Unknown template or palette values fall back to their defaults instead
/// of rejecting the request.
pub async fn handle_resume(
    State(state): State<AppState>,
    Query(query): Query<ResumeQuery>,
) -> Html<String> {
    let options = query.options();
    let user = state.session.load();
    let doc = ResumeDocument::for_user(user.as_ref());
    Html(render_resume(user.as_ref(), &options, &doc))
}

fn render_entries(title: &str, entries: &[ResumeEntry], accent: &str) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            let period = if e.period.is_empty() {
                String::new()
            } else {
                format!(r#" <span class="muted">{}</span>"#, text(&e.period))
            };
            let detail = if e.detail.is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", text(&e.detail))
            };
            format!("<div><h3>{}{period}</h3>{detail}</div>", text(&e.heading))
        })
        .collect();
    format!(r#"<section><h2 style="color:{accent}">{}</h2>{items}</section>"#, text(title))
}

fn render_controls(options: &ResumeOptions) -> String {
    let templates: String = Template::ALL
        .iter()
        .map(|t| {
            let selected = if *t == options.template { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, t.as_str(), t.label())
        })
        .collect();
    let palettes: String = Palette::ALL
        .iter()
        .map(|p| {
            let selected = if *p == options.palette { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, p.as_str(), p.label())
        })
        .collect();
    let dark = if options.dark { " checked" } else { "" };

    format!(
        r#"<form class="card controls" method="get" action="/resume">
<label>Template <select name="template">{templates}</select></label>
<label>Palette <select name="palette">{palettes}</select></label>
<label><input type="checkbox" name="dark" value="true"{dark}> Dark mode</label>
<button class="button" type="submit">Apply</button>
</form>"#
    )
}

pub fn render_resume(user: Option<&User>, options: &ResumeOptions, doc: &ResumeDocument) -> String {
    let accent = options.palette.accent();
    let (paper, ink) = options.paper_colors();

    let skills: String = doc
        .skills
        .iter()
        .map(|s| format!("<li>{}</li>", text(s)))
        .collect();
    let certifications: String = doc
        .certifications
        .iter()
        .map(|c| format!("<li>{}</li>", text(c)))
        .collect();

    let sidebar = format!(
        r#"<aside><h2 style="color:{accent}">{name}</h2><h4>{headline}</h4>
<h3>Contact</h3><p>{email}</p><p>{phone}</p>
<h3>Skills</h3><ul>{skills}</ul>
<h3>Certifications</h3><ul>{certifications}</ul></aside>"#,
        name = text(&doc.name),
        headline = text(&doc.headline),
        email = text(&doc.email),
        phone = text(&doc.phone),
    );

    let main = format!(
        r#"<div class="resume-main"><section><h2 style="color:{accent}">Summary</h2><p>{}</p></section>{}{}{}</div>"#,
        text(&doc.summary),
        render_entries("Experience", &doc.experience, accent),
        render_entries("Projects", &doc.projects, accent),
        render_entries("Education", &doc.education, accent),
    );

    let layout = if options.template.has_sidebar() {
        "display:grid;grid-template-columns:1fr 2fr;gap:24px"
    } else {
        "display:block"
    };

    let body = format!(
        r#"<h1>Resume Builder</h1>
{controls}
<div class="resume-paper template-{template}" style="background:{paper};color:{ink};border-top:6px solid {accent};padding:32px;border-radius:8px;{layout}">
{sidebar}
{main}
</div>"#,
        controls = render_controls(options),
        template = options.template.as_str(),
    );
    render_page("Resume", user, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_template_keeps_valid_palette() {
        let query = ResumeQuery {
            template: Some("bogus".to_string()),
            palette: Some("red".to_string()),
            dark: Some("on".to_string()),
        };
        let options = query.options();
        assert_eq!(options.template, Template::Modern);
        assert_eq!(options.palette, Palette::Red);
        assert!(options.dark);
    }

    #[test]
    fn test_empty_query_is_default_options() {
        assert_eq!(ResumeQuery::default().options(), ResumeOptions::default());
    }

    #[test]
    fn test_resume_uses_palette_accent_and_dark_paper() {
        let options = ResumeOptions {
            template: Template::Creative,
            palette: Palette::Green,
            dark: true,
        };
        let html = render_resume(None, &options, &ResumeDocument::default());
        assert!(html.contains("#28a745"));
        assert!(html.contains("background:#1e1e1e"));
        assert!(html.contains("template-creative"));
    }

    #[test]
    fn test_classic_template_is_single_column() {
        let options = ResumeOptions {
            template: Template::Classic,
            ..Default::default()
        };
        let html = render_resume(None, &options, &ResumeDocument::default());
        assert!(html.contains("display:block"));
    }

    #[test]
    fn test_resume_shows_user_name() {
        let user = User::named("Asha <Dev>");
        let doc = ResumeDocument::for_user(Some(&user));
        let html = render_resume(Some(&user), &ResumeOptions::default(), &doc);
        assert!(html.contains("Asha &lt;Dev&gt;"));
    }
}

use std::str::FromStr;

use crate::models::user::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Template::Modern => "Modern",
            Template::Classic => "Classic",
            Template::Creative => "Creative",
        }
    }

    /// Classic drops the sidebar and stacks everything in one column.
    pub fn has_sidebar(&self) -> bool {
        !matches!(self, Template::Classic)
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown template '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Blue,
    Green,
    Red,
}

impl Palette {
    pub const ALL: [Palette; 3] = [Palette::Blue, Palette::Green, Palette::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Red => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Palette::Blue => "Blue",
            Palette::Green => "Green",
            Palette::Red => "Red",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Palette::Blue => "#1e90ff",
            Palette::Green => "#28a745",
            Palette::Red => "#dc3545",
        }
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown palette '{s}'"))
    }
}

/// Builder controls, read from the /resume query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResumeOptions {
    pub template: Template,
    pub palette: Palette,
    pub dark: bool,
}

impl ResumeOptions {
    pub fn paper_colors(&self) -> (&'static str, &'static str) {
        if self.dark {
            ("#1e1e1e", "#f0f0f0")
        } else {
            ("#ffffff", "#333333")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeEntry {
    pub heading: String,
    pub period: String,
    pub detail: String,
}

/// The document shown in the builder preview. Starts from sample content and
/// takes name, email, and skills from the session user when present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub summary: String,
    pub experience: Vec<ResumeEntry>,
    pub projects: Vec<ResumeEntry>,
    pub education: Vec<ResumeEntry>,
}

fn entry(heading: &str, period: &str, detail: &str) -> ResumeEntry {
    ResumeEntry {
        heading: heading.to_string(),
        period: period.to_string(),
        detail: detail.to_string(),
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Full Stack Developer".to_string(),
            email: "you@example.com".to_string(),
            phone: "+91 9876543210".to_string(),
            skills: ["JavaScript", "React", "Node.js", "SQL", "Python"]
                .into_iter()
                .map(String::from)
                .collect(),
            certifications: vec![
                "AWS Cloud Practitioner".to_string(),
                "Google Data Analytics".to_string(),
            ],
            summary: "Developer who enjoys building clean, reliable web applications \
                      and shipping them end to end."
                .to_string(),
            experience: vec![
                entry(
                    "Software Engineer @ TechCorp",
                    "2023 – Present",
                    "Built and maintained customer-facing features across the stack.",
                ),
                entry(
                    "Intern @ StartupX",
                    "2022",
                    "Implemented dashboards and internal tooling.",
                ),
            ],
            projects: vec![
                entry(
                    "CareerPilot",
                    "",
                    "Career services portal with job search and skill recommendations.",
                ),
                entry("Portfolio Website", "", "Personal site showcasing projects."),
            ],
            education: vec![entry("B.Tech in CSE", "2019 – 2023", "")],
        }
    }
}

impl ResumeDocument {
    pub fn for_user(user: Option<&User>) -> Self {
        let mut doc = Self::default();
        let Some(user) = user else {
            return doc;
        };

        doc.name = user.name.clone();
        if let Some(email) = user.email.as_deref().filter(|e| !e.trim().is_empty()) {
            doc.email = email.trim().to_string();
        }
        if let Some(skills) = user.skills_text() {
            doc.skills = skills
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_accents() {
        assert_eq!(Palette::Blue.accent(), "#1e90ff");
        assert_eq!(Palette::Green.accent(), "#28a745");
        assert_eq!(Palette::Red.accent(), "#dc3545");
    }

    #[test]
    fn test_options_default_to_modern_blue_light() {
        let opts = ResumeOptions::default();
        assert_eq!(opts.template, Template::Modern);
        assert_eq!(opts.palette, Palette::Blue);
        assert_eq!(opts.paper_colors(), ("#ffffff", "#333333"));
    }

    #[test]
    fn test_template_and_palette_parse_case_insensitively() {
        let template: Template = " Classic ".parse().unwrap();
        assert_eq!(template, Template::Classic);
        assert!(!template.has_sidebar());
        assert_eq!("RED".parse::<Palette>().unwrap().accent(), "#dc3545");
        assert!("bogus".parse::<Template>().is_err());
        assert!("purple".parse::<Palette>().is_err());
    }

    #[test]
    fn test_document_without_user_is_sample() {
        assert_eq!(ResumeDocument::for_user(None), ResumeDocument::default());
    }

    #[test]
    fn test_document_takes_user_details() {
        let user = User {
            id: None,
            name: "Asha".to_string(),
            email: Some("asha@example.com".to_string()),
            skills: Some("Rust, , SQL".to_string()),
        };
        let doc = ResumeDocument::for_user(Some(&user));
        assert_eq!(doc.name, "Asha");
        assert_eq!(doc.email, "asha@example.com");
        assert_eq!(doc.skills, vec!["Rust", "SQL"]);
    }
}

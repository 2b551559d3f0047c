use serde::Serialize;

/// A skill paired with a learning resource. Catalog entries are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLink {
    pub name: &'static str,
    pub url: &'static str,
}

impl SkillLink {
    pub const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }
}

/// A named group of skill links, shown on the skills page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [SkillLink],
}

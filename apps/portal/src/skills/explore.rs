use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::skills::catalog::SKILL_SUGGESTIONS;

const MAX_SUGGESTIONS: usize = 5;

/// Course platform searched from the skills page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Coursera,
    Udemy,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Coursera, Platform::Udemy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Coursera => "coursera",
            Platform::Udemy => "udemy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Coursera => "Coursera",
            Platform::Udemy => "Udemy",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coursera" => Ok(Platform::Coursera),
            "udemy" => Ok(Platform::Udemy),
            other => Err(format!("unknown course platform '{other}'")),
        }
    }
}

/// Up to five suggestion names containing `input`, case-insensitively.
/// Blank input suggests nothing.
pub fn suggest(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return vec![];
    }
    SKILL_SUGGESTIONS
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

/// Search URL for `query` on `platform`, or `None` for a blank query.
pub fn course_search_url(platform: Platform, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let encoded = urlencoding::encode(query);
    Some(match platform {
        Platform::Coursera => format!("https://www.coursera.org/search?query={encoded}"),
        Platform::Udemy => format!("https://www.udemy.com/courses/search/?q={encoded}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_blank_input_is_empty() {
        assert!(suggest("   ").is_empty());
    }

    #[test]
    fn test_suggest_is_case_insensitive_substring() {
        assert_eq!(suggest("SCRIPT"), vec!["JavaScript"]);
    }

    #[test]
    fn test_suggest_caps_at_five() {
        // "a" appears in far more than five suggestion names.
        assert_eq!(suggest("a").len(), 5);
    }

    #[test]
    fn test_course_search_url_encodes_query() {
        assert_eq!(
            course_search_url(Platform::Coursera, "C++ & Rust").as_deref(),
            Some("https://www.coursera.org/search?query=C%2B%2B%20%26%20Rust")
        );
        assert_eq!(
            course_search_url(Platform::Udemy, "sql").as_deref(),
            Some("https://www.udemy.com/courses/search/?q=sql")
        );
    }

    #[test]
    fn test_course_search_url_blank_query_is_none() {
        assert!(course_search_url(Platform::Udemy, " ").is_none());
    }

    #[test]
    fn test_platform_parses_case_insensitively() {
        assert_eq!("UDEMY".parse::<Platform>(), Ok(Platform::Udemy));
        assert!("edx".parse::<Platform>().is_err());
    }
}

//! Resume skill extraction: finds known skills in resume text and folds them
//! into the user's comma-separated skills string.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Resume vocabulary → canonical skill name. Several spellings map to the
/// same canonical name; output order follows the first hit in this table.
const SKILL_SYNONYMS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("py", "Python"),
    ("python", "Python"),
    ("ml", "Machine Learning"),
    ("machine learning", "Machine Learning"),
    ("reactjs", "React"),
    ("react", "React"),
    ("sql", "SQL"),
    ("aws", "AWS"),
    ("excel", "Excel"),
    ("java", "Java"),
];

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),
}

fn synonym_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SKILL_SYNONYMS
            .iter()
            .map(|(key, canonical)| {
                let pattern = format!(r"\b{}\b", regex::escape(key));
                // Keys are fixed literals, escaped above.
                let re = Regex::new(&pattern).expect("skill synonym pattern is valid");
                (re, *canonical)
            })
            .collect()
    })
}

/// Canonical skills mentioned in `text` as whole words, case-insensitive.
/// Each canonical name appears at most once.
pub fn extract_skills_from_text(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();
    let mut found: Vec<&'static str> = Vec::new();
    for (re, canonical) in synonym_patterns() {
        if !found.contains(canonical) && re.is_match(&text) {
            found.push(canonical);
        }
    }
    found
}

/// Extracts text from an in-memory PDF and scans it for skills.
pub fn extract_skills_from_pdf(bytes: &[u8]) -> Result<Vec<&'static str>, ResumeError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ResumeError::Pdf(e.to_string()))?;
    Ok(extract_skills_from_text(&text))
}

/// Appends `extracted` skills not already present (case-insensitive) to the
/// existing skills string. Existing entries keep their order and spelling.
/// Returns `None` when the result would be empty.
pub fn merge_skills(existing: Option<&str>, extracted: &[&str]) -> Option<String> {
    let mut merged: Vec<String> = existing
        .unwrap_or("")
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    for skill in extracted {
        if !merged.iter().any(|m| m.eq_ignore_ascii_case(skill)) {
            merged.push(skill.to_string());
        }
    }

    if merged.is_empty() {
        None
    } else {
        Some(merged.join(", "))
    }
}

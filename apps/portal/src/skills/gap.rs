use std::collections::HashSet;

use crate::models::skill::SkillLink;

/// Splits a comma-separated skills string into trimmed, lower-cased names.
/// Empty segments are dropped.
pub fn normalize_skills(skills: &str) -> HashSet<String> {
    skills
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns the catalog entries the user lacks, in catalog order.
///
/// A skill counts as present only on an exact case-insensitive match of a
/// comma-separated segment: "React" does not cover "React Native". A missing
/// or empty skills string yields the whole catalog.
pub fn missing_skills(skills: Option<&str>, catalog: &[SkillLink]) -> Vec<SkillLink> {
    let have = skills.map(normalize_skills).unwrap_or_default();
    catalog
        .iter()
        .filter(|skill| !have.contains(&skill.name.to_lowercase()))
        .copied()
        .collect()
}

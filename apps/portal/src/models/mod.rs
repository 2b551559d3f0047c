pub mod job;
pub mod skill;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Accepts a JSON string or number and yields it as a string.
/// The remote API sends numeric ids and salaries in some responses and
/// strings in others.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Loose>::deserialize(deserializer)?.map(|v| match v {
        Loose::Text(s) => s,
        Loose::Number(n) => n.to_string(),
    }))
}

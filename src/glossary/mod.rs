pub mod cache;
pub mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoadError;

pub use cache::GlossaryCache;
pub use loader::{GlossaryLoader, GlossarySource};

/// One shot type from the glossary. Identity is `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ShotDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Hover text for the shot: the description, or the name when there is none.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

/// Classification metadata. Never interpreted, only passed through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension(pub serde_json::Value);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shots: Vec<ShotDefinition>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dimensions: Vec<Dimension>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode and validate a glossary document.
///
/// Either the whole document is accepted or an error is returned.
pub fn parse_glossary(body: &str) -> std::result::Result<GlossaryData, LoadError> {
    parse_glossary_bytes(body.as_bytes())
}

/// Same as [`parse_glossary`] for a raw body. Invalid UTF-8 is a parse error.
pub fn parse_glossary_bytes(body: &[u8]) -> std::result::Result<GlossaryData, LoadError> {
    let data: GlossaryData = serde_json::from_slice(body)?;
    validate_shots(&data.shots)?;
    Ok(data)
}

fn validate_shots(shots: &[ShotDefinition]) -> std::result::Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(shots.len());
    for (index, shot) in shots.iter().enumerate() {
        if shot.name.trim().is_empty() {
            return Err(LoadError::EmptyShotName { index });
        }
        if !seen.insert(shot.name.as_str()) {
            return Err(LoadError::DuplicateShot(shot.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_defaults() {
        let data = parse_glossary("{}").unwrap();
        assert!(data.shots.is_empty());
        assert!(data.dimensions.is_empty());
    }

    #[test]
    fn test_null_keys_default() {
        let data = parse_glossary(r#"{"shots": null, "dimensions": null}"#).unwrap();
        assert_eq!(data, GlossaryData::default());
    }

    #[test]
    fn test_description_falls_back_to_name() {
        let data = parse_glossary(
            r#"{"shots": [{"name": "Smash"}, {"name": "Clear", "description": "High, deep clear"}]}"#,
        )
        .unwrap();
        assert_eq!(data.shots[0].description(), "Smash");
        assert_eq!(data.shots[1].description(), "High, deep clear");
    }

    #[test]
    fn test_dimensions_pass_through() {
        let body = r#"{"dimensions": [{"key": "hand", "values": ["Forehand"], "extra": {"n": 1}}, "loose"]}"#;
        let data = parse_glossary(body).unwrap();
        assert_eq!(data.dimensions.len(), 2);
        assert_eq!(data.dimensions[0].0["extra"]["n"], 1);
        assert_eq!(data.dimensions[1].0, serde_json::json!("loose"));
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(parse_glossary("not json"), Err(LoadError::Parse(_))));
        assert!(matches!(
            parse_glossary_bytes(b"{\"shots\": [{\"name\": \"\xff\"}]}"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(parse_glossary(r#"{"shots": {}}"#), Err(LoadError::Parse(_))));
        assert!(matches!(
            parse_glossary(r#"{"shots": [{"name": "Smash"}, {"name": " "}]}"#),
            Err(LoadError::EmptyShotName { index: 1 })
        ));
        assert!(matches!(
            parse_glossary(r#"{"shots": [{"name": "Drop"}, {"name": "Drop"}]}"#),
            Err(LoadError::DuplicateShot(name)) if name == "Drop"
        ));
    }

    #[test]
    fn test_bundled_glossary_parses() {
        let data = parse_glossary(crate::assets::glossary_json()).unwrap();
        assert!(data.shots.iter().any(|s| s.name == "Smash"));
        let push = data.shots.iter().find(|s| s.name == "Push").unwrap();
        assert_eq!(push.description(), "Push");
    }
}

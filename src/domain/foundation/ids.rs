//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Length of a generated scene identifier.
const SCENE_ID_LEN: usize = 8;

/// Short opaque identifier for a stored scene composition.
///
/// Generated ids are the first eight hex characters of a random UUID. Ids
/// received from clients are accepted as-is as long as they are non-empty and
/// free of whitespace; lookups of ids that were never issued simply miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Creates a fresh random SceneId.
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SCENE_ID_LEN);
        Self(id)
    }

    /// Creates a SceneId from an existing string, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("scene_id"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("scene_id", "contains whitespace"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SceneId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_scene_id_is_short_hex() {
        let id = SceneId::generate();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_scene_ids_differ() {
        assert_ne!(SceneId::generate(), SceneId::generate());
    }

    #[test]
    fn scene_id_rejects_empty() {
        assert!(SceneId::new("").is_err());
        assert!(SceneId::new("   ").is_err());
    }

    #[test]
    fn scene_id_rejects_whitespace() {
        assert!(matches!(
            SceneId::new("ab cd"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn scene_id_parses_from_str() {
        let id: SceneId = "abc12345".parse().unwrap();
        assert_eq!(id.to_string(), "abc12345");
    }

    #[test]
    fn scene_id_serializes_transparently() {
        let id = SceneId::new("deadbeef").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"deadbeef\"");
    }
}

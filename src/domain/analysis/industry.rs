//! Industry tag for analyses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target market for an analysis.
///
/// Unknown tags are kept verbatim in `Other` so they round-trip to the client
/// unchanged; they only select the default cost baseline and the baseline
/// fallback content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    #[default]
    Gaming,
    Education,
    Architecture,
    Ecommerce,
    Other(String),
}

impl Industry {
    /// Base traditional-pipeline cost for a scene in this industry.
    pub fn base_cost(&self) -> f64 {
        match self {
            Industry::Gaming => 5000.0,
            Industry::Education => 3000.0,
            Industry::Architecture => 8000.0,
            Industry::Ecommerce => 2000.0,
            Industry::Other(_) => 3000.0,
        }
    }

    /// Extra instruction appended to the analysis prompt.
    pub fn prompt_focus(&self) -> &'static str {
        match self {
            Industry::Gaming => {
                "Focus on game-ready assets, characters with rigging potential, and interactive elements"
            }
            Industry::Education => {
                "Emphasize educational clarity, labeled components, and learning objectives"
            }
            Industry::Architecture => {
                "Focus on spatial relationships, scale accuracy, and material specifications"
            }
            Industry::Ecommerce => {
                "Highlight product presentation, multiple angles, and marketing appeal"
            }
            Industry::Other(_) => "",
        }
    }

    /// Returns the tag as sent by the client.
    pub fn as_str(&self) -> &str {
        match self {
            Industry::Gaming => "gaming",
            Industry::Education => "education",
            Industry::Architecture => "architecture",
            Industry::Ecommerce => "ecommerce",
            Industry::Other(tag) => tag,
        }
    }
}

impl From<String> for Industry {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "gaming" => Industry::Gaming,
            "education" => Industry::Education,
            "architecture" => Industry::Architecture,
            "ecommerce" => Industry::Ecommerce,
            _ => Industry::Other(tag),
        }
    }
}

impl From<&str> for Industry {
    fn from(tag: &str) -> Self {
        Industry::from(tag.to_string())
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        match industry {
            Industry::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Industry {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Industry::from(s))
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(Industry::from("gaming"), Industry::Gaming);
        assert_eq!(Industry::from("education"), Industry::Education);
        assert_eq!(Industry::from("architecture"), Industry::Architecture);
        assert_eq!(Industry::from("ecommerce"), Industry::Ecommerce);
    }

    #[test]
    fn unknown_tag_passes_through_unchanged() {
        let industry = Industry::from("Film & TV");
        assert_eq!(industry, Industry::Other("Film & TV".to_string()));
        assert_eq!(industry.as_str(), "Film & TV");
        assert_eq!(industry.base_cost(), 3000.0);
        assert_eq!(industry.prompt_focus(), "");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Industry::from("Gaming"), Industry::Other("Gaming".to_string()));
    }

    #[test]
    fn base_costs_per_industry() {
        assert_eq!(Industry::Gaming.base_cost(), 5000.0);
        assert_eq!(Industry::Education.base_cost(), 3000.0);
        assert_eq!(Industry::Architecture.base_cost(), 8000.0);
        assert_eq!(Industry::Ecommerce.base_cost(), 2000.0);
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Industry::Ecommerce).unwrap(), "\"ecommerce\"");
        let other: Industry = serde_json::from_str("\"robotics\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"robotics\"");
    }

    #[test]
    fn defaults_to_gaming() {
        assert_eq!(Industry::default(), Industry::Gaming);
    }
}

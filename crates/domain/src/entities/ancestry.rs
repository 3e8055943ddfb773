//! Ancestry entries - a character's inherited lineage.
//!
//! Every ancestry carries exactly two named features, in presentation order.

use serde::{Deserialize, Serialize};

use super::compendium::{CompendiumKind, CompendiumSource, CompendiumSystem};

/// A named ancestry feature.
///
/// Data-carrying struct with no invariants; fields are public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AncestryFeature {
    pub name: String,
    pub description: String,
}

impl AncestryFeature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A row of the ancestry source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryEntry {
    /// Display name, unique within the table
    pub name: String,
    /// HTML prose, passed through untouched
    pub description: String,
    pub features: [AncestryFeature; 2],
}

impl AncestryEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        features: [AncestryFeature; 2],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            features,
        }
    }
}

/// The `system` payload of an ancestry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AncestrySystem {
    pub description: String,
    pub features: [AncestryFeature; 2],
}

impl CompendiumSystem for AncestrySystem {
    const KIND: CompendiumKind = CompendiumKind::Ancestry;
}

impl CompendiumSource for AncestryEntry {
    type System = AncestrySystem;

    fn name(&self) -> &str {
        &self.name
    }

    fn to_system(&self) -> AncestrySystem {
        AncestrySystem {
            description: self.description.clone(),
            features: self.features.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mirrors_entry_in_order() {
        let entry = AncestryEntry::new(
            "Elf",
            "<h2>Elf</h2>",
            [
                AncestryFeature::new("Keen Senses", "Sense magic."),
                AncestryFeature::new("Nimble", "Move as a reaction."),
            ],
        );
        let system = entry.to_system();

        assert_eq!(entry.name(), "Elf");
        assert_eq!(system.description, "<h2>Elf</h2>");
        assert_eq!(system.features[0].name, "Keen Senses");
        assert_eq!(system.features[1].name, "Nimble");
    }

    #[test]
    fn payload_with_three_features_is_rejected() {
        let json = r#"{"description":"d","features":[
            {"name":"a","description":"a"},
            {"name":"b","description":"b"},
            {"name":"c","description":"c"}]}"#;
        assert!(serde_json::from_str::<AncestrySystem>(json).is_err());
    }
}

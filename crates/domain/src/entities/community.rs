//! Community entries - a character's cultural background.

use serde::{Deserialize, Serialize};

use super::compendium::{CompendiumKind, CompendiumSource, CompendiumSystem};

/// A row of the community source table.
///
/// Communities carry a single plain-text feature rather than named ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityEntry {
    pub name: String,
    pub description: String,
    pub feature: String,
}

impl CommunityEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        feature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            feature: feature.into(),
        }
    }
}

/// The `system` payload of a community record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommunitySystem {
    pub description: String,
    pub feature: String,
}

impl CompendiumSystem for CommunitySystem {
    const KIND: CompendiumKind = CompendiumKind::Community;
}

impl CompendiumSource for CommunityEntry {
    type System = CommunitySystem;

    fn name(&self) -> &str {
        &self.name
    }

    fn to_system(&self) -> CommunitySystem {
        CommunitySystem {
            description: self.description.clone(),
            feature: self.feature.clone(),
        }
    }
}

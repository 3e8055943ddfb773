//! Compendium records - the output unit loaded by the game-system plugin.
//!
//! Every pack line shares one base shape (`name`, `type`, `img`, `system`,
//! `effects`, `flags`, `id`). Only the `system` payload differs per kind, so
//! the base record is generic over it and each payload type is bound to its
//! kind through [`CompendiumSystem`]. An ancestry record cannot carry a
//! community payload and vice versa.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ancestry::AncestrySystem;
use super::community::CommunitySystem;
use crate::ids::RecordId;

/// The collection a record belongs to. Serialized as the record's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompendiumKind {
    Ancestry,
    Community,
}

impl CompendiumKind {
    pub const ALL: [CompendiumKind; 2] = [CompendiumKind::Ancestry, CompendiumKind::Community];

    /// The `type` tag written to every record of this kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            CompendiumKind::Ancestry => "ancestry",
            CompendiumKind::Community => "community",
        }
    }

    /// Noun prefixed to the numeric part of a [`RecordId`].
    pub fn id_prefix(&self) -> &'static str {
        self.type_tag()
    }

    /// Placeholder artwork shared by every record of this kind.
    pub fn default_img(&self) -> &'static str {
        match self {
            CompendiumKind::Ancestry => "icons/environment/people/group.webp",
            CompendiumKind::Community => "icons/environment/settlement/city.webp",
        }
    }

    /// File name of this kind's pack inside the packs directory.
    pub fn pack_file(&self) -> &'static str {
        match self {
            CompendiumKind::Ancestry => "ancestries.db",
            CompendiumKind::Community => "communities.db",
        }
    }

    /// Plural label used in log output.
    pub fn plural(&self) -> &'static str {
        match self {
            CompendiumKind::Ancestry => "ancestries",
            CompendiumKind::Community => "communities",
        }
    }
}

impl fmt::Display for CompendiumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// A `system` payload type, tied to exactly one compendium kind.
pub trait CompendiumSystem: Serialize + DeserializeOwned + Clone {
    const KIND: CompendiumKind;
}

/// A source row that can be turned into a compendium record.
pub trait CompendiumSource {
    type System: CompendiumSystem;

    /// Display name, copied verbatim into the record.
    fn name(&self) -> &str;

    /// The `system` payload mirroring this row.
    fn to_system(&self) -> Self::System;
}

/// One line of a compendium pack.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompendiumRecord<S> {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CompendiumKind,
    pub img: String,
    pub system: S,
    /// Reserved for the downstream rules engine. Always empty for now.
    pub effects: Vec<Value>,
    /// Reserved. Always empty for now.
    pub flags: Map<String, Value>,
    pub id: RecordId,
}

impl<S: CompendiumSystem> CompendiumRecord<S> {
    /// Create a record with the kind's stub artwork and empty effects/flags.
    pub fn new(name: impl Into<String>, system: S, id: RecordId) -> Self {
        Self {
            name: name.into(),
            kind: S::KIND,
            img: S::KIND.default_img().to_string(),
            system,
            effects: Vec::new(),
            flags: Map::new(),
            id,
        }
    }
}

pub type AncestryRecord = CompendiumRecord<AncestrySystem>;
pub type CommunityRecord = CompendiumRecord<CommunitySystem>;

/// A record of either kind, for code that reads packs back.
///
/// The payload structs reject unknown fields, so a line deserializes into
/// the variant whose `system` shape it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompendiumItem {
    Ancestry(AncestryRecord),
    Community(CommunityRecord),
}

impl CompendiumItem {
    /// The kind implied by the payload shape.
    pub fn kind(&self) -> CompendiumKind {
        match self {
            CompendiumItem::Ancestry(_) => CompendiumKind::Ancestry,
            CompendiumItem::Community(_) => CompendiumKind::Community,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CompendiumItem::Ancestry(record) => &record.name,
            CompendiumItem::Community(record) => &record.name,
        }
    }

    pub fn id(&self) -> RecordId {
        match self {
            CompendiumItem::Ancestry(record) => record.id,
            CompendiumItem::Community(record) => record.id,
        }
    }

    /// Whether the `type` tag and the id prefix both agree with the payload.
    pub fn is_consistent(&self) -> bool {
        let (tag, id) = match self {
            CompendiumItem::Ancestry(record) => (record.kind, record.id),
            CompendiumItem::Community(record) => (record.kind, record.id),
        };
        tag == self.kind() && id.kind() == self.kind()
    }
}

impl From<AncestryRecord> for CompendiumItem {
    fn from(record: AncestryRecord) -> Self {
        CompendiumItem::Ancestry(record)
    }
}

impl From<CommunityRecord> for CompendiumItem {
    fn from(record: CommunityRecord) -> Self {
        CompendiumItem::Community(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AncestryFeature, CommunityEntry};

    fn sample_ancestry() -> AncestryRecord {
        let system = AncestrySystem {
            description: "<p>Stone folk.</p>".to_string(),
            features: [
                AncestryFeature::new("Stout", "Hard to move."),
                AncestryFeature::new("Craftsmanship", "Good with tools."),
            ],
        };
        CompendiumRecord::new("Dwarf", system, RecordId::new(CompendiumKind::Ancestry, 3))
    }

    #[test]
    fn new_record_uses_kind_stubs() {
        let record = sample_ancestry();
        assert_eq!(record.kind, CompendiumKind::Ancestry);
        assert_eq!(record.img, "icons/environment/people/group.webp");
        assert!(record.effects.is_empty());
        assert!(record.flags.is_empty());
    }

    #[test]
    fn keys_serialize_in_pack_order() {
        let json = serde_json::to_string(&sample_ancestry()).expect("serialize");
        assert_eq!(
            json,
            concat!(
                r#"{"name":"Dwarf","type":"ancestry","img":"icons/environment/people/group.webp","#,
                r#""system":{"description":"<p>Stone folk.</p>","features":["#,
                r#"{"name":"Stout","description":"Hard to move."},"#,
                r#"{"name":"Craftsmanship","description":"Good with tools."}]},"#,
                r#""effects":[],"flags":{},"id":"ancestry00000003"}"#
            )
        );
    }

    #[test]
    fn community_record_has_singular_feature() {
        let entry = CommunityEntry::new("Wandering Folk", "<p>Nomads.</p>", "Travel well.");
        let record = CompendiumRecord::new(
            entry.name(),
            entry.to_system(),
            RecordId::new(CompendiumKind::Community, 1),
        );
        let value = serde_json::to_value(&record).expect("serialize");

        assert_eq!(value["type"], "community");
        assert_eq!(value["img"], "icons/environment/settlement/city.webp");
        assert_eq!(value["system"]["feature"], "Travel well.");
        assert!(value["system"].get("features").is_none());
    }

    #[test]
    fn item_deserializes_by_payload_shape() {
        let line = serde_json::to_string(&sample_ancestry()).expect("serialize");
        let item: CompendiumItem = serde_json::from_str(&line).expect("deserialize");
        assert_eq!(item.kind(), CompendiumKind::Ancestry);
        assert_eq!(item.name(), "Dwarf");
        assert!(item.is_consistent());

        let line = concat!(
            r#"{"name":"Lorekeeper","type":"community","img":"x","#,
            r#""system":{"description":"d","feature":"f"},"#,
            r#""effects":[],"flags":{},"id":"community00000001"}"#
        );
        let item: CompendiumItem = serde_json::from_str(line).expect("deserialize");
        assert_eq!(item.kind(), CompendiumKind::Community);
        assert_eq!(item.id().to_string(), "community00000001");
    }

    #[test]
    fn item_flags_mismatched_type_tag() {
        let line = concat!(
            r#"{"name":"Lorekeeper","type":"ancestry","img":"x","#,
            r#""system":{"description":"d","feature":"f"},"#,
            r#""effects":[],"flags":{},"id":"community00000001"}"#
        );
        let item: CompendiumItem = serde_json::from_str(line).expect("deserialize");
        assert!(!item.is_consistent());
    }

    #[test]
    fn pack_files_are_distinct() {
        assert_eq!(CompendiumKind::Ancestry.pack_file(), "ancestries.db");
        assert_eq!(CompendiumKind::Community.pack_file(), "communities.db");
        assert_eq!(CompendiumKind::Community.to_string(), "community");
    }
}

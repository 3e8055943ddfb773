//! Daggerheart packs domain.
//!
//! The compendium record shapes consumed by the game-system plugin, and the
//! SRD source tables they are generated from.

pub mod entities;
pub mod error;
pub mod ids;
pub mod srd;

pub use entities::{
    AncestryEntry, AncestryFeature, AncestryRecord, AncestrySystem, CommunityEntry,
    CommunityRecord, CommunitySystem, CompendiumItem, CompendiumKind, CompendiumRecord,
    CompendiumSource, CompendiumSystem,
};
pub use error::{DomainError, DomainResult};
pub use ids::RecordId;

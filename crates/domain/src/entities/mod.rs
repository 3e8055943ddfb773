//! Domain entities - source rows and the compendium records built from them

mod ancestry;
mod community;
mod compendium;

pub use ancestry::{AncestryEntry, AncestryFeature, AncestrySystem};
pub use community::{CommunityEntry, CommunitySystem};
pub use compendium::{
    AncestryRecord, CommunityRecord, CompendiumItem, CompendiumKind, CompendiumRecord,
    CompendiumSource, CompendiumSystem,
};

//! Pack generation: build each collection, then write its pack.
//!
//! Collections run in sequence with no rollback. If the ancestry pack fails,
//! the community pack is never attempted.

use dhpacks_domain::{srd, AncestryEntry, CommunityEntry, CompendiumSource, CompendiumSystem};

use crate::builder::build_records;
use crate::config::GeneratorConfig;
use crate::error::PackError;
use crate::writer::write_pack;

/// Record counts from one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub ancestries: usize,
    pub communities: usize,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.ancestries + self.communities
    }
}

/// Generate both SRD packs into the configured directory.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, PackError> {
    generate_with(config, &srd::ancestries(), &srd::communities())
}

/// Generate packs from caller-supplied tables.
pub fn generate_with(
    config: &GeneratorConfig,
    ancestries: &[AncestryEntry],
    communities: &[CommunityEntry],
) -> Result<GenerationReport, PackError> {
    let report = GenerationReport {
        ancestries: write_collection(config, ancestries)?,
        communities: write_collection(config, communities)?,
    };

    tracing::info!(
        ancestries = report.ancestries,
        communities = report.communities,
        total = report.total(),
        "SRD content creation complete"
    );
    Ok(report)
}

fn write_collection<T: CompendiumSource>(
    config: &GeneratorConfig,
    rows: &[T],
) -> Result<usize, PackError> {
    let kind = <T::System as CompendiumSystem>::KIND;
    let path = config.pack_path(kind);
    tracing::info!(%kind, "Creating {}", kind.plural());

    let records = build_records(rows);
    let count = write_pack(&path, &records)?;

    tracing::info!(%kind, path = %path.display(), count, "Created {} {}", count, kind.plural());
    Ok(count)
}

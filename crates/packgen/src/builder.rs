//! Source rows to compendium records.
//!
//! Ids are assigned by position: the row at index 0 becomes `<noun>00000001`.
//! Building is a pure function of its input; nothing is validated.

use dhpacks_domain::{
    AncestryEntry, AncestryRecord, CommunityEntry, CommunityRecord, CompendiumRecord,
    CompendiumSource, CompendiumSystem, RecordId,
};

/// Build one record per row, preserving order.
pub fn build_records<T: CompendiumSource>(rows: &[T]) -> Vec<CompendiumRecord<T::System>> {
    let kind = <T::System as CompendiumSystem>::KIND;
    rows.iter()
        .enumerate()
        .map(|(position, row)| {
            CompendiumRecord::new(
                row.name(),
                row.to_system(),
                RecordId::from_position(kind, position),
            )
        })
        .collect()
}

pub fn build_ancestry_records(rows: &[AncestryEntry]) -> Vec<AncestryRecord> {
    build_records(rows)
}

pub fn build_community_records(rows: &[CommunityEntry]) -> Vec<CommunityRecord> {
    build_records(rows)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use dhpacks_domain::{srd, AncestryFeature, CompendiumKind};

    use super::*;

    fn community(name: &str) -> CommunityEntry {
        CommunityEntry::new(name, format!("<h2>{name}</h2>"), format!("{name} feature"))
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let records = build_ancestry_records(&srd::ancestries());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id.to_string(), format!("ancestry{:08}", i + 1));
        }
        let unique: HashSet<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn output_length_matches_input() {
        assert_eq!(build_ancestry_records(&srd::ancestries()).len(), 18);
        assert_eq!(build_community_records(&srd::communities()).len(), 9);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(build_community_records(&[]).is_empty());
        assert!(build_ancestry_records(&[]).is_empty());
    }

    #[test]
    fn input_order_is_preserved() {
        let rows = vec![community("Zeta"), community("Alpha"), community("Mu")];
        let names: Vec<_> = build_community_records(&rows)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn records_mirror_rows() {
        let rows = vec![AncestryEntry::new(
            "Giant",
            "<h2>Giant</h2>",
            [
                AncestryFeature::new("Massive", "Bigger."),
                AncestryFeature::new("Mighty Throw", "Farther."),
            ],
        )];
        let record = &build_ancestry_records(&rows)[0];

        assert_eq!(record.name, "Giant");
        assert_eq!(record.kind, CompendiumKind::Ancestry);
        assert_eq!(record.system.description, "<h2>Giant</h2>");
        assert_eq!(record.system.features, rows[0].features);
        assert!(record.effects.is_empty());
        assert!(record.flags.is_empty());
    }

    #[test]
    fn collections_number_independently() {
        let communities = build_community_records(&[community("A"), community("B")]);
        let ancestries = build_ancestry_records(&srd::ancestries());
        assert_eq!(communities[0].id.to_string(), "community00000001");
        assert_eq!(ancestries[0].id.to_string(), "ancestry00000001");
    }

    #[test]
    fn repeated_builds_are_equal() {
        let rows = srd::communities();
        assert_eq!(build_community_records(&rows), build_community_records(&rows));
    }
}

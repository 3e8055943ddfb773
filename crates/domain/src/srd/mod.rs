//! Hand-authored SRD content tables.
//!
//! Row order is presentation order and determines record ids.

mod ancestries;
mod communities;

pub use ancestries::ancestries;
pub use communities::communities;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ancestry_table_has_eighteen_rows() {
        let rows = ancestries();
        assert_eq!(rows.len(), 18);
        assert_eq!(rows[0].name, "Daemon");
        assert_eq!(rows[17].name, "Tanuki");
    }

    #[test]
    fn community_table_has_nine_rows() {
        let rows = communities();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].name, "Lorekeeper");
        assert_eq!(rows[8].name, "Ember Isle Collective");
    }

    #[test]
    fn names_are_unique_per_table() {
        let ancestry_names: HashSet<_> = ancestries().into_iter().map(|r| r.name).collect();
        assert_eq!(ancestry_names.len(), 18);

        let community_names: HashSet<_> = communities().into_iter().map(|r| r.name).collect();
        assert_eq!(community_names.len(), 9);
    }

    #[test]
    fn descriptions_open_with_the_row_heading() {
        for row in ancestries() {
            assert!(
                row.description.starts_with(&format!("<h2>{}</h2>", row.name)),
                "{} description heading",
                row.name
            );
        }
        for row in communities() {
            assert!(
                row.description.starts_with(&format!("<h2>{}</h2>", row.name)),
                "{} description heading",
                row.name
            );
        }
    }

    #[test]
    fn ancestry_features_are_named() {
        for row in ancestries() {
            for feature in &row.features {
                assert!(!feature.name.is_empty(), "{} has an unnamed feature", row.name);
                assert!(!feature.description.is_empty());
            }
        }
    }
}

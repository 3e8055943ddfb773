use std::path::{Path, PathBuf};

use anyhow::Context;
use dhpacks_domain::{CompendiumItem, CompendiumKind};
use dhpacks_packgen::{generate, GeneratorConfig, DEFAULT_PACKS_DIR};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("packs-check") => {
            let dir = args.next().map(PathBuf::from).unwrap_or_else(default_packs_dir);
            packs_check(&dir)?;
            println!("packs up to date: {}", dir.display());
            Ok(())
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  packs-check [dir]"
        ),
    }
}

fn default_packs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(DEFAULT_PACKS_DIR)
}

/// Fail unless every pack in `dir` is well-formed and matches a fresh run.
fn packs_check(dir: &Path) -> anyhow::Result<()> {
    let fresh_dir = tempfile::tempdir().context("creating scratch directory")?;
    let fresh = GeneratorConfig::new(fresh_dir.path());
    generate(&fresh).context("regenerating packs")?;

    let committed = GeneratorConfig::new(dir);
    for kind in CompendiumKind::ALL {
        let path = committed.pack_path(kind);
        let contents =
            std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;

        check_lines(kind, &contents).with_context(|| format!("checking {}", path.display()))?;

        let expected = std::fs::read_to_string(fresh.pack_path(kind))
            .context("reading regenerated pack")?;
        if contents != expected {
            anyhow::bail!(
                "{} is stale; rerun `cargo run -p dhpacks-packgen`",
                path.display()
            );
        }
    }

    Ok(())
}

/// Every line must decode as a record of `kind` whose tag and id agree.
fn check_lines(kind: CompendiumKind, contents: &str) -> anyhow::Result<()> {
    for (number, line) in contents.lines().enumerate() {
        let number = number + 1;
        let item: CompendiumItem = serde_json::from_str(line)
            .with_context(|| format!("line {number} is not a compendium record"))?;
        if item.kind() != kind || !item.is_consistent() {
            anyhow::bail!("line {number} ({}) is not a consistent {kind} record", item.name());
        }
        if item.id().index() != number {
            anyhow::bail!("line {number} has id {}", item.id());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_packs() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        generate(&GeneratorConfig::new(dir.path())).expect("generate");
        dir
    }

    #[test]
    fn fresh_packs_pass() {
        let dir = fresh_packs();
        packs_check(dir.path()).expect("fresh packs are current");
    }

    #[test]
    fn edited_pack_is_stale() {
        let dir = fresh_packs();
        let path = dir.path().join(CompendiumKind::Community.pack_file());
        let edited = std::fs::read_to_string(&path)
            .expect("read")
            .replace("Lorekeeper", "Loremaster");
        std::fs::write(&path, edited).expect("write");

        let err = packs_check(dir.path()).expect_err("stale");
        assert!(err.to_string().contains("stale"));
    }

    #[test]
    fn missing_pack_fails() {
        let dir = fresh_packs();
        std::fs::remove_file(dir.path().join(CompendiumKind::Ancestry.pack_file())).expect("rm");
        assert!(packs_check(dir.path()).is_err());
    }

    #[test]
    fn community_line_in_ancestry_pack_is_rejected() {
        let line = concat!(
            r#"{"name":"Lorekeeper","type":"community","img":"x","#,
            r#""system":{"description":"d","feature":"f"},"#,
            r#""effects":[],"flags":{},"id":"community00000001"}"#
        );
        assert!(check_lines(CompendiumKind::Ancestry, line).is_err());
        assert!(check_lines(CompendiumKind::Community, line).is_ok());
    }

    #[test]
    fn out_of_position_id_is_rejected() {
        let line = concat!(
            r#"{"name":"Lorekeeper","type":"community","img":"x","#,
            r#""system":{"description":"d","feature":"f"},"#,
            r#""effects":[],"flags":{},"id":"community00000002"}"#
        );
        let err = check_lines(CompendiumKind::Community, line).expect_err("bad id");
        assert!(err.to_string().contains("community00000002"));
    }
}

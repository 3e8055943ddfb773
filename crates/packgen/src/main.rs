//! Daggerheart packs generator - writes `packs/ancestries.db` and
//! `packs/communities.db`.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dhpacks_packgen::{generate, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    // Only RUST_LOG is read from the environment.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dhpacks_packgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Creating comprehensive Daggerheart SRD content");

    let config = GeneratorConfig::default();
    let report = generate(&config).context("generating compendium packs")?;

    tracing::info!(total = report.total(), "Total entries created");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

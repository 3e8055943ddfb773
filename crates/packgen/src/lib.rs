//! Daggerheart packs generator.
//!
//! Builds compendium records from the SRD tables and writes them as
//! newline-delimited JSON packs for the game-system plugin.

pub mod builder;
pub mod config;
pub mod error;
pub mod generate;
pub mod writer;


pub use builder::{build_ancestry_records, build_community_records, build_records};
pub use config::{GeneratorConfig, DEFAULT_PACKS_DIR};
pub use error::PackError;
pub use generate::{generate, generate_with, GenerationReport};
pub use writer::{encode_line, write_pack};

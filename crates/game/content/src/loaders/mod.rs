//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into core or content types. Every
//! loader also accepts a string, which is how the embedded defaults load.

pub mod config;
pub mod effects;
pub mod factory;
pub mod item;
pub mod player;
pub mod skills;

pub use config::ConfigLoader;
pub use effects::EffectLoader;
pub use factory::{Content, ContentFactory};
pub use item::ItemLoader;
pub use player::{PlayerLoader, PlayerTemplate};
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

//! Content factory for building registries from data files.

use std::path::{Path, PathBuf};

use usable_core::{GameConfig, ItemTemplate};

use crate::effects::EffectCatalog;
use crate::loaders::{
    ConfigLoader, EffectLoader, ItemLoader, LoadResult, PlayerLoader, PlayerTemplate, SkillLoader,
};
use crate::skills::SkillBook;

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");
const EMBEDDED_ITEMS: &str = include_str!("../../data/items.ron");
const EMBEDDED_SKILLS: &str = include_str!("../../data/skills.ron");
const EMBEDDED_EFFECTS: &str = include_str!("../../data/effects.ron");
const EMBEDDED_PLAYER: &str = include_str!("../../data/player.ron");

/// Everything a session needs to run the `use` command.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: GameConfig,
    pub items: Vec<ItemTemplate>,
    pub skills: SkillBook,
    pub effects: EffectCatalog,
    pub player: PlayerTemplate,
}

impl Content {
    /// Returns the item template with the given entity reference.
    pub fn item(&self, entity_ref: &str) -> Option<&ItemTemplate> {
        self.items
            .iter()
            .find(|template| template.entity_ref == entity_ref)
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── skills.ron
/// ├── effects.ron
/// └── player.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemTemplate>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillBook> {
        let path = self.data_dir.join("skills.ron");
        SkillLoader::load(&path)
    }

    /// Load effect templates from `effects.ron`.
    pub fn load_effects(&self) -> LoadResult<EffectCatalog> {
        let path = self.data_dir.join("effects.ron");
        EffectLoader::load(&path)
    }

    /// Load the player template from `player.ron`.
    pub fn load_player(&self) -> LoadResult<PlayerTemplate> {
        let path = self.data_dir.join("player.ron");
        PlayerLoader::load(&path)
    }

    /// Load every content file, then validate cross references.
    pub fn load_all(&self) -> LoadResult<Content> {
        let content = Content {
            config: self.load_config()?,
            items: self.load_items()?,
            skills: self.load_skills()?,
            effects: self.load_effects()?,
            player: self.load_player()?,
        };
        Self::validate(&content);

        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = content.items.len(),
            skills = content.skills.len(),
            effects = content.effects.len(),
            "Loaded content"
        );
        Ok(content)
    }

    /// Content shipped with the crate.
    pub fn embedded() -> LoadResult<Content> {
        let content = Content {
            config: ConfigLoader::parse(EMBEDDED_CONFIG)?,
            items: ItemLoader::parse(EMBEDDED_ITEMS)?,
            skills: SkillLoader::parse(EMBEDDED_SKILLS)?,
            effects: EffectLoader::parse(EMBEDDED_EFFECTS)?,
            player: PlayerLoader::parse(EMBEDDED_PLAYER)?,
        };
        Self::validate(&content);
        Ok(content)
    }

    /// Reports items whose usable configuration points at unknown skills or
    /// effects, and starting items missing from the catalog.
    ///
    /// Problems are logged as warnings and returned; loading still succeeds,
    /// and using such an item fails with a configuration error instead.
    pub fn validate(content: &Content) -> Vec<String> {
        let mut warnings = Vec::new();

        for item in &content.items {
            let Some(usable) = &item.usable else {
                continue;
            };
            if let Some(skill) = &usable.ability {
                if !content.skills.contains(skill) {
                    warnings.push(format!(
                        "{} references unknown skill {}",
                        item.entity_ref, skill
                    ));
                }
            }
            if let Some(effect) = &usable.effect {
                if !content.effects.contains(effect) {
                    warnings.push(format!(
                        "{} references unknown effect {}",
                        item.entity_ref, effect
                    ));
                }
            }
            if usable.is_inert() {
                warnings.push(format!(
                    "{} is usable but has neither ability nor effect",
                    item.entity_ref
                ));
            }
        }

        for entity_ref in &content.player.items {
            if content.item(entity_ref).is_none() {
                warnings.push(format!("starting item {} is not in the catalog", entity_ref));
            }
        }

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        warnings
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

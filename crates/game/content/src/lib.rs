//! Data-driven content definitions and loaders.
//!
//! This crate supplies the skills and effects the invocation core dispatches
//! to, and loads game content from RON/TOML data files:
//! - Skill definitions (data-driven via RON), served by [`SkillBook`]
//! - Effect templates (data-driven via RON), served by [`EffectCatalog`]
//! - Item catalogs (data-driven via RON)
//! - Player template (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! A default content set is embedded in the crate; see
//! [`ContentFactory::embedded`].

pub mod effects;
pub mod skills;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use effects::{EffectCatalog, EffectTemplate};
pub use skills::{ResourceCost, SkillBook, SkillDefinition, SkillKind};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, Content, ContentFactory, EffectLoader, ItemLoader, LoadResult, PlayerLoader,
    PlayerTemplate, SkillLoader,
};

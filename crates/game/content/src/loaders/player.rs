//! Player template loader.
//!
//! The template names the player's resource pools, innate immunities and
//! starting items (by entity reference into the item catalog).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use usable_core::{ActorState, EffectId, GameConfig, Inventory, ItemTemplate, ResourceMeter};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTemplate {
    pub name: String,
    /// Pool name to maximum; pools start full.
    #[serde(default)]
    pub resources: BTreeMap<String, u32>,
    #[serde(default)]
    pub immunities: Vec<EffectId>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl PlayerTemplate {
    /// Builds the actor and its starting inventory.
    ///
    /// `name` replaces the template's name when given.
    pub fn spawn(
        &self,
        name: Option<&str>,
        config: &GameConfig,
        catalog: &[ItemTemplate],
    ) -> LoadResult<(ActorState, Inventory)> {
        let mut actor = ActorState::new(name.unwrap_or(&self.name), config.max_active_effects);
        for (resource, maximum) in &self.resources {
            actor = actor.with_resource(resource.clone(), ResourceMeter::full(*maximum));
        }
        for immunity in &self.immunities {
            actor.add_immunity(immunity.clone());
        }

        let mut inventory = Inventory::new(config.inventory_capacity);
        for entity_ref in &self.items {
            let template = catalog
                .iter()
                .find(|template| &template.entity_ref == entity_ref)
                .ok_or_else(|| anyhow::anyhow!("Starting item {} is not in the catalog", entity_ref))?;
            inventory
                .add(template)
                .map_err(|e| anyhow::anyhow!("Failed to give starting item {}: {}", entity_ref, e))?;
        }

        Ok((actor, inventory))
    }
}

/// Loader for the player template from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load(path: &Path) -> LoadResult<PlayerTemplate> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PlayerTemplate> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse player RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> PlayerTemplate {
        PlayerLoader::parse(
            r#"(
                name: "Adventurer",
                resources: { "health": 30, "mana": 20 },
                immunities: ["poison"],
                items: ["limbo:wand", "limbo:wand"],
            )"#,
        )
        .unwrap()
    }

    fn catalog() -> Vec<ItemTemplate> {
        vec![ItemTemplate::new("limbo:wand", "a fire wand")]
    }

    #[test]
    fn spawns_actor_with_full_pools_and_items() {
        let (actor, inventory) = template()
            .spawn(Some("Rend"), &GameConfig::default(), &catalog())
            .unwrap();

        assert_eq!(actor.name(), "Rend");
        assert_eq!(actor.resource("mana"), Some(&ResourceMeter::full(20)));
        assert!(actor.is_immune(&EffectId::new("poison")));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn unknown_starting_item_fails() {
        let mut template = template();
        template.items.push("limbo:crown".to_string());
        assert!(
            template
                .spawn(None, &GameConfig::default(), &catalog())
                .is_err()
        );
    }

    #[test]
    fn starting_items_respect_capacity() {
        let config = GameConfig::default().with_inventory_capacity(1);
        assert!(template().spawn(None, &config, &catalog()).is_err());
    }
}

//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use usable_core::ItemTemplate;

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemTemplate>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemTemplates.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemTemplate>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use usable_core::{EffectId, SkillId};

    use super::*;

    #[test]
    fn parses_usable_configuration() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (
                        entity_ref: "limbo:wand",
                        name: "a fire wand",
                        keywords: ["wand"],
                        usable: Some((
                            ability: Some("fireball"),
                            cooldown: Some(12.5),
                            charges: Some(3),
                            destroy_on_depleted: true,
                        )),
                    ),
                    (
                        entity_ref: "limbo:vial",
                        name: "a vial of venom",
                        usable: Some((
                            effect: Some("poison"),
                            config: Some({ "duration": 10.0 }),
                            state: Some({ "ticks": 0 }),
                        )),
                    ),
                    (entity_ref: "limbo:rock", name: "a rock"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 3);

        let wand = items[0].usable.as_ref().unwrap();
        assert_eq!(wand.ability, Some(SkillId::new("fireball")));
        assert_eq!(wand.cooldown_override, Some(Duration::from_millis(12_500)));
        assert_eq!(wand.charges, Some(3));
        assert!(wand.destroy_on_depleted);

        let vial = items[1].usable.as_ref().unwrap();
        assert_eq!(vial.effect, Some(EffectId::new("poison")));
        assert_eq!(vial.charges, None);
        assert!(!vial.destroy_on_depleted);
        assert!(items[1].keywords.is_empty());

        assert!(items[2].usable.is_none());
    }

    #[test]
    fn rejects_unknown_usable_fields() {
        let result = ItemLoader::parse(
            r#"(items: [(entity_ref: "x", name: "x", usable: Some((charge: Some(1))))])"#,
        );
        assert!(result.is_err());
    }
}

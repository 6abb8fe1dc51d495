//! Effect templates loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::effects::{EffectCatalog, EffectTemplate};
use crate::loaders::{LoadResult, read_file};

/// Effect list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectTemplateList {
    pub effects: Vec<EffectTemplate>,
}

/// Loader for the effect catalog from RON files.
pub struct EffectLoader;

impl EffectLoader {
    pub fn load(path: &Path) -> LoadResult<EffectCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EffectCatalog> {
        let list: EffectTemplateList = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effects RON: {}", e))?;

        Ok(EffectCatalog::from_templates(list.effects))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use usable_core::EffectId;

    use super::*;

    #[test]
    fn parses_templates_with_defaults() {
        let catalog = EffectLoader::parse(
            r#"(
                effects: [
                    (
                        id: "poison",
                        config: { "duration": 10.0, "damage": 2 },
                        state: { "ticks": 0 },
                    ),
                    (id: "blessed"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let poison = catalog.template(&EffectId::new("poison")).unwrap();
        assert_eq!(poison.config.get("damage"), Some(&json!(2)));
        assert_eq!(poison.state, json!({ "ticks": 0 }));

        let blessed = catalog.template(&EffectId::new("blessed")).unwrap();
        assert!(blessed.config.is_empty());
        assert!(blessed.state.is_null());
    }
}

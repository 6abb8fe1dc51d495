/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of items an actor can carry.
    pub inventory_capacity: usize,
    /// Number of simultaneously attached effects per actor.
    /// Effects beyond this limit are rejected by the actor.
    pub max_active_effects: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 20;
    pub const DEFAULT_MAX_ACTIVE_EFFECTS: usize = 8;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            max_active_effects: Self::DEFAULT_MAX_ACTIVE_EFFECTS,
        }
    }

    pub fn with_inventory_capacity(mut self, inventory_capacity: usize) -> Self {
        self.inventory_capacity = inventory_capacity;
        self
    }

    pub fn with_max_active_effects(mut self, max_active_effects: usize) -> Self {
        self.max_active_effects = max_active_effects;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

use serde::Serialize;

/// A gate evaluated before a pool is allowed to fire.
///
/// Only `random_chance` is populated today; the `condition`
/// discriminator keeps the set open for further vanilla condition
/// types.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "condition")]
pub enum LootCondition {
    #[serde(rename = "minecraft:random_chance")]
    RandomChance { chance: f32 },
}

impl LootCondition {
    /// Fire independently with probability `chance`, in `[0, 1]`.
    pub fn random_chance(chance: f32) -> Self {
        Self::RandomChance { chance }
    }
}

use lootforge_util::ResourceName;
use serde::Serialize;

use crate::function::{LootFunction, ENCHANT_LEVELS};
use crate::number::NumberProvider;

/// What an entry yields when drawn.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    #[serde(rename = "minecraft:item")]
    Item,
    #[serde(rename = "minecraft:loot_table")]
    Table,
}

/// One drawable outcome inside a pool: a vanilla item or a reference
/// to another generated table, with a relative weight and an ordered
/// list of post-processing functions.
///
/// The function list always exists on the value and is only elided
/// from the serialized form when empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LootPoolEntry {
    #[serde(rename = "type")]
    kind: EntryKind,
    name: ResourceName,
    weight: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    functions: Vec<LootFunction>,
}

impl LootPoolEntry {
    pub fn item(name: ResourceName) -> Self {
        Self::new(EntryKind::Item, name)
    }

    pub fn table(name: ResourceName) -> Self {
        Self::new(EntryKind::Table, name)
    }

    fn new(kind: EntryKind, name: ResourceName) -> Self {
        Self {
            kind,
            name,
            weight: 1,
            functions: Vec::new(),
        }
    }

    /// Override the default weight of 1.
    #[must_use]
    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Draw a uniformly random stack size.
    #[must_use]
    pub fn count(mut self, min: f32, max: f32) -> Self {
        self.functions.push(LootFunction::SetCount {
            count: NumberProvider::uniform(min, max),
        });
        self
    }

    /// Enchant the item at the standard level, treasure enchantments
    /// included.
    #[must_use]
    pub fn enchanted(mut self) -> Self {
        self.functions.push(LootFunction::EnchantWithLevels {
            levels: ENCHANT_LEVELS,
            treasure: true,
        });
        self
    }

    /// Apply a uniformly random durability loss.
    #[must_use]
    pub fn damaged(mut self, min: f32, max: f32) -> Self {
        self.functions.push(LootFunction::SetDamage {
            damage: NumberProvider::uniform(min, max),
        });
        self
    }

    /// The standard wear on dropped gear: the lower bound stays at 5%
    /// while the upper bound scales with `factor`.
    #[must_use]
    pub fn worn(self, factor: i32) -> Self {
        self.damaged(0.05, factor as f32 * 0.2)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }
}

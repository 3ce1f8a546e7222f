//! The serializable loot table model.
//!
//! This model is write-only: every shape derives `Serialize` and none
//! derives `Deserialize`. The generated documents are consumed by the
//! game engine, never read back by this tool, and keeping the read
//! direction unimplemented makes any attempt to do so a compile error
//! instead of a silent wrong value.

use lootforge_util::ResourceName;
use serde::Serialize;

pub mod condition;
pub mod entry;
pub mod function;
pub mod number;

pub use condition::LootCondition;
pub use entry::{EntryKind, LootPoolEntry};
pub use function::LootFunction;
pub use number::NumberProvider;

/// One weighted draw group inside a loot table.
///
/// Performs `rolls` draws from `entries`; weights are relative to this
/// pool's entry list only. `conditions` gate the whole pool and are
/// dropped from the output when empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LootPool {
    rolls: NumberProvider,
    entries: Vec<LootPoolEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<LootCondition>,
}

impl LootPool {
    pub fn new(rolls: NumberProvider, entries: Vec<LootPoolEntry>) -> Self {
        Self {
            rolls,
            entries,
            conditions: Vec::new(),
        }
    }

    /// A pool that defers to another generated table: a uniform roll
    /// range over a single loot-table entry named `table`.
    pub fn delegate(table: ResourceName, min: f32, max: f32) -> Self {
        Self::new(
            NumberProvider::uniform(min, max),
            vec![LootPoolEntry::table(table)],
        )
    }

    /// Gate the whole pool behind `condition`.
    #[must_use]
    pub fn with_condition(mut self, condition: LootCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn rolls(&self) -> &NumberProvider {
        &self.rolls
    }

    pub fn entries(&self) -> &[LootPoolEntry] {
        &self.entries
    }

    pub fn conditions(&self) -> &[LootCondition] {
        &self.conditions
    }
}

/// A complete loot table plus the file it is written to.
///
/// `file_name` is a build-time detail; the serialized body is exactly
/// `{"pools": [...]}`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LootTable {
    #[serde(skip)]
    file_name: String,
    pools: Vec<LootPool>,
}

impl LootTable {
    pub fn new(file_name: impl Into<String>, pools: Vec<LootPool>) -> Self {
        Self {
            file_name: file_name.into(),
            pools,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn pools(&self) -> &[LootPool] {
        &self.pools
    }
}

use std::{fs, io, path::Path};

use lootforge_loot::LootPoolEntry;
use lootforge_util::Namespaces;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry of user-added item definitions, kept beside the config
/// file. Registered items become available as catalog entries without
/// touching the built-in set.
pub const REGISTRY_FILE: &str = "custom_items.toml";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to access the item registry: {0}")]
    Io(#[from] io::Error),
    #[error("The item registry is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to encode the item registry: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// One registered item: a vanilla identifier plus an optional count
/// range. Both bounds are present or neither is.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CustomItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl CustomItem {
    /// Build the pool entry this definition stands for.
    pub fn to_entry(&self, ns: &Namespaces) -> LootPoolEntry {
        let entry = LootPoolEntry::item(ns.vanilla(&self.name));
        match (self.min, self.max) {
            (Some(min), Some(max)) => entry.count(min as f32, max as f32),
            _ => entry,
        }
    }
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ItemRegistry {
    pub items: Vec<CustomItem>,
}

impl ItemRegistry {
    /// An absent file is an empty registry, not an error.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), RegistryError> {
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }
}

/// Append one definition to the registry file.
pub fn append(path: &Path, item: CustomItem) -> Result<(), RegistryError> {
    let mut registry = ItemRegistry::load(path)?;
    registry.items.push(item);
    registry.save(path)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn ns() -> Namespaces {
        Namespaces::new("baseraids", "minecraft")
    }

    #[test]
    fn appends_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REGISTRY_FILE);

        append(
            &path,
            CustomItem {
                name: "ruby".to_string(),
                min: None,
                max: None,
            },
        )
        .unwrap();
        append(
            &path,
            CustomItem {
                name: "amethyst_shard".to_string(),
                min: Some(3),
                max: Some(9),
            },
        )
        .unwrap();

        let registry = ItemRegistry::load(&path).unwrap();
        assert_eq!(registry.items.len(), 2);
        assert_eq!(registry.items[0].name, "ruby");
        assert_eq!(registry.items[1].min, Some(3));
    }

    #[test]
    fn missing_registry_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ItemRegistry::load(&dir.path().join(REGISTRY_FILE)).unwrap();
        assert!(registry.items.is_empty());
    }

    #[test]
    fn plain_definition_becomes_a_bare_item_entry() {
        let item = CustomItem {
            name: "ruby".to_string(),
            min: None,
            max: None,
        };
        let value: Value =
            serde_json::from_str(&serde_json::to_string(&item.to_entry(&ns())).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"type": "minecraft:item", "name": "minecraft:ruby", "weight": 1})
        );
    }

    #[test]
    fn ranged_definition_gets_a_count_function() {
        let item = CustomItem {
            name: "amethyst_shard".to_string(),
            min: Some(3),
            max: Some(9),
        };
        let value: Value =
            serde_json::from_str(&serde_json::to_string(&item.to_entry(&ns())).unwrap()).unwrap();
        assert_eq!(
            value["functions"],
            json!([
                {"function": "minecraft:set_count", "count": {"min": 3.0, "max": 9.0}}
            ])
        );
    }
}

use serde::Serialize;

use crate::number::NumberProvider;

/// Enchantment level used for every enchanted entry.
pub const ENCHANT_LEVELS: i32 = 30;

/// A post-processing step applied to a drawn item. Entries carry an
/// ordered list of these; order is preserved through serialization.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "function")]
pub enum LootFunction {
    #[serde(rename = "minecraft:set_count")]
    SetCount { count: NumberProvider },
    #[serde(rename = "minecraft:set_damage")]
    SetDamage { damage: NumberProvider },
    #[serde(rename = "minecraft:enchant_with_levels")]
    EnchantWithLevels { levels: i32, treasure: bool },
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn to_json(function: LootFunction) -> Value {
        serde_json::from_str(&serde_json::to_string(&function).unwrap()).unwrap()
    }

    #[test]
    fn set_count_wraps_its_provider() {
        let function = LootFunction::SetCount {
            count: NumberProvider::uniform(5.0, 20.0),
        };
        assert_eq!(
            to_json(function),
            json!({"function": "minecraft:set_count", "count": {"min": 5.0, "max": 20.0}})
        );
    }

    #[test]
    fn enchant_keeps_field_order() {
        let function = LootFunction::EnchantWithLevels {
            levels: ENCHANT_LEVELS,
            treasure: true,
        };
        assert_eq!(
            serde_json::to_string(&function).unwrap(),
            r#"{"function":"minecraft:enchant_with_levels","levels":30,"treasure":true}"#
        );
    }
}

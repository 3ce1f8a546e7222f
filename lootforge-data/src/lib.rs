//! The hand-tuned reward catalog: ten escalating tiers plus the entry
//! constructors they draw from. Pure data; the shapes live in
//! `lootforge-loot`.

pub mod entries;
mod levels;

pub use levels::catalog;

#[cfg(test)]
mod tests {
    use lootforge_loot::{LootCondition, NumberProvider};
    use lootforge_util::Namespaces;
    use serde_json::{json, Value};

    use super::*;

    fn ns() -> Namespaces {
        Namespaces::new("baseraids", "minecraft")
    }

    #[test]
    fn ten_tiers_in_order() {
        let names: Vec<String> = catalog(&ns())
            .iter()
            .map(|table| table.file_name().to_string())
            .collect();
        let expected: Vec<String> = (1..=10).map(|tier| format!("level{tier}.json")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn every_tier_has_a_gated_head_pool() {
        for table in catalog(&ns()) {
            let head_pools: Vec<_> = table
                .pools()
                .iter()
                .filter(|pool| !pool.conditions().is_empty())
                .collect();
            assert_eq!(head_pools.len(), 1, "{} head pools", table.file_name());

            let head = head_pools[0];
            assert!(
                matches!(head.rolls(), NumberProvider::Constant(_)),
                "{} head pool rolls a range",
                table.file_name()
            );
            assert_eq!(
                head.conditions(),
                &[LootCondition::random_chance(0.3)],
                "{} head pool gate",
                table.file_name()
            );
        }
    }

    #[test]
    fn potions_join_from_tier_two() {
        for (index, table) in catalog(&ns()).iter().enumerate() {
            let has_potions = table.pools().iter().any(|pool| {
                pool.entries()
                    .iter()
                    .any(|entry| entry.name().as_str() == "baseraids:potions")
            });
            assert_eq!(has_potions, index >= 1, "{}", table.file_name());
        }
    }

    #[test]
    fn food_only_feeds_the_early_tiers() {
        for (index, table) in catalog(&ns()).iter().enumerate() {
            let has_food = table.pools().iter().any(|pool| {
                pool.entries()
                    .iter()
                    .any(|entry| entry.name().as_str() == "baseraids:food")
            });
            assert_eq!(has_food, index < 3, "{}", table.file_name());
        }
    }

    #[test]
    fn serialization_is_idempotent() {
        let first: Vec<String> = catalog(&ns())
            .iter()
            .map(|table| serde_json::to_string_pretty(table).unwrap())
            .collect();
        let second: Vec<String> = catalog(&ns())
            .iter()
            .map(|table| serde_json::to_string_pretty(table).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn tier_one_opens_with_logs_and_sand() {
        let tables = catalog(&ns());
        let value: Value =
            serde_json::from_str(&serde_json::to_string(&tables[0]).unwrap()).unwrap();

        assert_eq!(value["pools"].as_array().unwrap().len(), 6);
        assert_eq!(
            value["pools"][0],
            json!({
                "rolls": {"min": 0.0, "max": 1.0},
                "entries": [
                    {
                        "type": "minecraft:loot_table",
                        "name": "baseraids:wood_logs",
                        "weight": 1,
                        "functions": [
                            {"function": "minecraft:set_count", "count": {"min": 15.0, "max": 30.0}}
                        ]
                    },
                    {
                        "type": "minecraft:item",
                        "name": "minecraft:sand",
                        "weight": 1,
                        "functions": [
                            {"function": "minecraft:set_count", "count": {"min": 20.0, "max": 40.0}}
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn late_tiers_carry_enchanted_netherite() {
        let tables = catalog(&ns());
        let value: Value =
            serde_json::from_str(&serde_json::to_string(&tables[9]).unwrap()).unwrap();

        let gear = value["pools"][1]["entries"].as_array().unwrap();
        assert_eq!(gear[0]["name"], json!("minecraft:netherite_helmet"));
        assert_eq!(
            gear[0]["functions"],
            json!([
                {"function": "minecraft:enchant_with_levels", "levels": 30, "treasure": true},
                {"function": "minecraft:set_damage", "damage": {"min": 0.05, "max": 0.4}}
            ])
        );
    }

    #[test]
    fn namespaces_are_threaded_not_baked_in() {
        let tables = catalog(&Namespaces::new("myraids", "minecraft"));
        let value: Value =
            serde_json::from_str(&serde_json::to_string(&tables[1]).unwrap()).unwrap();
        let last = value["pools"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["entries"][0]["name"], json!("myraids:potions"));
    }
}

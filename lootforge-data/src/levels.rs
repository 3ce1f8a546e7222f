//! The ten hand-tuned tiers.
//!
//! Rewards escalate across the tiers: raw materials and unenchanted
//! iron early on, enchanted iron, then diamond, then netherite gear
//! late. Every tier carries a chance-gated head pool, and a potions
//! sub-pool joins from tier 2 onward.

use lootforge_loot::{LootCondition, LootPool, LootPoolEntry, LootTable, NumberProvider};
use lootforge_util::Namespaces;

use crate::entries::*;

/// Independent chance for the head pool of each tier to fire.
const HEAD_DROP_CHANCE: f32 = 0.3;

/// Every tier in generation order.
pub fn catalog(ns: &Namespaces) -> Vec<LootTable> {
    vec![
        level1(ns),
        level2(ns),
        level3(ns),
        level4(ns),
        level5(ns),
        level6(ns),
        level7(ns),
        level8(ns),
        level9(ns),
        level10(ns),
    ]
}

fn head_pool(entries: Vec<LootPoolEntry>) -> LootPool {
    LootPool::new(NumberProvider::default(), entries)
        .with_condition(LootCondition::random_chance(HEAD_DROP_CHANCE))
}

fn uniform(min: f32, max: f32) -> NumberProvider {
    NumberProvider::uniform(min, max)
}

fn level1(ns: &Namespaces) -> LootTable {
    LootTable::new(
        "level1.json",
        vec![
            LootPool::new(uniform(0.0, 1.0), vec![wood_logs(ns, 1), sand(ns, 1)]),
            LootPool::new(uniform(0.0, 1.0), vec![shield(ns), arrows(ns, 1).weight(5)]),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![saddle(ns), name_tag(ns), explorer_map(ns), xp_bottles(ns, 1)],
            ),
            food_pool(ns, 1.0, 5.0),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![leather(ns), emerald(ns, 1), coal(ns)],
            ),
            head_pool(vec![zombie_head(ns), skeleton_skull(ns)]),
        ],
    )
}

fn level2(ns: &Namespaces) -> LootTable {
    let mut gear = vec![shield(ns), arrows(ns, 1).weight(3)];
    gear.extend(plain_set(ns, &IRON_GEAR));

    LootTable::new(
        "level2.json",
        vec![
            LootPool::new(
                uniform(0.0, 1.0),
                vec![
                    wood_logs(ns, 1),
                    sand(ns, 1),
                    clay_balls(ns, 1),
                    glowstone_dust(ns, 1),
                ],
            ),
            LootPool::new(uniform(0.0, 1.0), gear),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![saddle(ns), name_tag(ns), explorer_map(ns), xp_bottles(ns, 1)],
            ),
            food_pool(ns, 1.0, 5.0),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![leather(ns), emerald(ns, 1), coal(ns), iron_ingots(ns, 1)],
            ),
            head_pool(vec![zombie_head(ns), skeleton_skull(ns)]),
            potions_pool(ns, 0.0, 3.0),
        ],
    )
}

fn level3(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 1)];
    gear.extend(enchanted_set(ns, &IRON_GEAR, 1));

    LootTable::new(
        "level3.json",
        vec![
            LootPool::new(
                uniform(0.0, 2.0),
                vec![
                    wood_logs(ns, 1).weight(2),
                    sand(ns, 1).weight(2),
                    clay_balls(ns, 1).weight(2),
                    glowstone_dust(ns, 1).weight(2),
                    lapis_lazuli(ns, 1).weight(2),
                    quartz(ns, 1).weight(2),
                    lantern(ns, 1).weight(2),
                    vine(ns).weight(2),
                    blue_ice(ns, 1),
                ],
            ),
            LootPool::new(uniform(0.0, 2.0), gear),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![
                    saddle(ns),
                    name_tag(ns),
                    explorer_map(ns),
                    xp_bottles(ns, 1),
                    enchanted_books(ns),
                ],
            ),
            food_pool(ns, 1.0, 5.0),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![
                    leather(ns),
                    emerald(ns, 1),
                    coal(ns),
                    iron_ingots(ns, 1),
                    gold_ingots(ns),
                ],
            ),
            head_pool(vec![zombie_head(ns), skeleton_skull(ns)]),
            potions_pool(ns, 0.0, 3.0),
        ],
    )
}

fn level4(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 1)];
    gear.extend(plain_set(ns, &DIAMOND_GEAR));

    LootTable::new(
        "level4.json",
        vec![
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    wood_logs(ns, 1).weight(2),
                    sand(ns, 1).weight(2),
                    clay_balls(ns, 1).weight(2),
                    glowstone_dust(ns, 1).weight(2),
                    lapis_lazuli(ns, 1).weight(2),
                    quartz(ns, 1).weight(2),
                    lantern(ns, 1).weight(2),
                    vine(ns).weight(2),
                    blue_ice(ns, 1),
                    obsidian(ns, 1).weight(2),
                ],
            ),
            LootPool::new(uniform(1.0, 2.0), gear),
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    saddle(ns),
                    name_tag(ns),
                    explorer_map(ns),
                    xp_bottles(ns, 2).weight(2),
                    enchanted_books(ns).weight(2),
                    ender_pearl(ns),
                    blaze_rod(ns),
                ],
            ),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![
                    leather(ns),
                    emerald(ns, 1),
                    iron_ingots(ns, 1),
                    gold_ingots(ns),
                ],
            ),
            head_pool(vec![zombie_head(ns), skeleton_skull(ns)]),
            potions_pool(ns, 0.0, 3.0),
        ],
    )
}

fn level5(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 1)];
    gear.extend(enchanted_set(ns, &DIAMOND_GEAR, 1));

    LootTable::new(
        "level5.json",
        vec![
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    wood_logs(ns, 1).weight(2),
                    sand(ns, 1).weight(2),
                    clay_balls(ns, 1).weight(2),
                    glowstone_dust(ns, 1).weight(2),
                    lapis_lazuli(ns, 1).weight(2),
                    quartz(ns, 1).weight(2),
                    lantern(ns, 1).weight(2),
                    vine(ns).weight(2),
                    blue_ice(ns, 1),
                    obsidian(ns, 1).weight(2),
                ],
            ),
            LootPool::new(uniform(1.0, 2.0), gear),
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    saddle(ns),
                    name_tag(ns),
                    explorer_map(ns),
                    xp_bottles(ns, 2).weight(2),
                    enchanted_books(ns).weight(3),
                    ender_pearl(ns),
                    blaze_rod(ns),
                ],
            ),
            LootPool::new(
                uniform(0.0, 2.0),
                vec![
                    emerald(ns, 1),
                    iron_ingots(ns, 1),
                    gold_ingots(ns),
                    diamonds(ns, 1),
                ],
            ),
            head_pool(vec![
                zombie_head(ns),
                skeleton_skull(ns),
                wither_skeleton_skull(ns),
            ]),
            potions_pool(ns, 1.0, 3.0),
        ],
    )
}

fn level6(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 1)];
    gear.extend(enchanted_set(ns, &DIAMOND_GEAR, 1));

    LootTable::new(
        "level6.json",
        vec![
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    wood_logs(ns, 2).weight(2),
                    sand(ns, 2).weight(2),
                    clay_balls(ns, 2).weight(2),
                    glowstone_dust(ns, 2).weight(2),
                    lapis_lazuli(ns, 2).weight(2),
                    quartz(ns, 2).weight(2),
                    lantern(ns, 2).weight(2),
                    vine(ns).weight(2),
                    blue_ice(ns, 2),
                    obsidian(ns, 2).weight(2),
                ],
            ),
            LootPool::new(uniform(1.0, 3.0), gear),
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    saddle(ns),
                    name_tag(ns),
                    explorer_map(ns),
                    xp_bottles(ns, 2).weight(2),
                    enchanted_books(ns).weight(3),
                    ender_pearl(ns),
                    blaze_rod(ns),
                ],
            ),
            LootPool::new(
                uniform(0.0, 1.0),
                vec![emerald(ns, 1), iron_ingots(ns, 1), diamonds(ns, 2)],
            ),
            head_pool(vec![
                zombie_head(ns),
                skeleton_skull(ns),
                wither_skeleton_skull(ns),
            ]),
            potions_pool(ns, 1.0, 3.0),
        ],
    )
}

fn level7(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 2)];
    gear.extend(enchanted_set(ns, &DIAMOND_GEAR, 2));
    gear.push(totem_of_undying(ns));

    LootTable::new(
        "level7.json",
        vec![
            LootPool::new(
                uniform(0.0, 2.0),
                vec![
                    wood_logs(ns, 2).weight(2),
                    sand(ns, 2).weight(2),
                    clay_balls(ns, 2).weight(2),
                    quartz(ns, 2).weight(2),
                    lantern(ns, 2).weight(2),
                    blue_ice(ns, 2),
                    obsidian(ns, 2).weight(3),
                ],
            ),
            LootPool::new(uniform(1.0, 2.0), gear),
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    name_tag(ns),
                    xp_bottles(ns, 2).weight(2),
                    enchanted_books(ns).weight(3),
                    ender_pearl(ns),
                    shulker_shell(ns, 1),
                ],
            ),
            LootPool::new(
                uniform(0.0, 1.0),
                vec![emerald(ns, 2), iron_ingots(ns, 2), diamonds(ns, 2)],
            ),
            head_pool(vec![
                zombie_head(ns),
                skeleton_skull(ns),
                wither_skeleton_skull(ns),
            ]),
            potions_pool(ns, 1.0, 3.0),
        ],
    )
}

fn level8(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 2)];
    gear.extend(enchanted_set(ns, &DIAMOND_GEAR, 2));
    gear.push(totem_of_undying(ns).weight(2));

    LootTable::new(
        "level8.json",
        vec![
            LootPool::new(
                uniform(0.0, 2.0),
                vec![wood_logs(ns, 3), clay_balls(ns, 2), obsidian(ns, 2)],
            ),
            LootPool::new(uniform(1.0, 3.0), gear),
            LootPool::new(
                uniform(0.0, 3.0),
                vec![
                    xp_bottles(ns, 2).weight(2),
                    enchanted_books(ns).weight(5),
                    ender_pearl(ns),
                    shulker_shell(ns, 1),
                ],
            ),
            LootPool::new(
                uniform(1.0, 2.0),
                vec![emerald(ns, 2), iron_ingots(ns, 2), diamonds(ns, 2)],
            ),
            head_pool(vec![
                zombie_head(ns),
                skeleton_skull(ns),
                wither_skeleton_skull(ns),
            ]),
            potions_pool(ns, 1.0, 3.0),
        ],
    )
}

fn level9(ns: &Namespaces) -> LootTable {
    let mut gear = vec![arrows(ns, 2)];
    gear.extend(enchanted_set(ns, &NETHERITE_GEAR, 1));
    gear.push(totem_of_undying(ns).weight(2));

    LootTable::new(
        "level9.json",
        vec![
            LootPool::new(
                uniform(0.0, 2.0),
                vec![wood_logs(ns, 3), clay_balls(ns, 2), obsidian(ns, 2)],
            ),
            LootPool::new(uniform(1.0, 3.0), gear),
            LootPool::new(
                uniform(1.0, 3.0),
                vec![xp_bottles(ns, 2), enchanted_books(ns), shulker_shell(ns, 1)],
            ),
            LootPool::new(
                uniform(1.0, 2.0),
                vec![
                    emerald(ns, 2),
                    iron_ingots(ns, 2),
                    diamonds(ns, 2),
                    netherite_scraps(ns, 1),
                ],
            ),
            head_pool(vec![
                zombie_head(ns),
                skeleton_skull(ns),
                wither_skeleton_skull(ns),
            ]),
            potions_pool(ns, 1.0, 3.0),
        ],
    )
}

fn level10(ns: &Namespaces) -> LootTable {
    // The axe and shovel drop out of the final tier's set.
    let mut gear = enchanted_set(
        ns,
        &[
            "netherite_helmet",
            "netherite_chestplate",
            "netherite_leggings",
            "netherite_boots",
            "netherite_pickaxe",
            "netherite_sword",
        ],
        2,
    );
    gear.push(totem_of_undying(ns).weight(2));
    gear.push(elytra(ns));
    gear.push(firework_rockets(ns));

    LootTable::new(
        "level10.json",
        vec![
            LootPool::new(
                uniform(0.0, 2.0),
                vec![wood_logs(ns, 3), clay_balls(ns, 2), obsidian(ns, 2)],
            ),
            LootPool::new(uniform(2.0, 4.0), gear),
            LootPool::new(
                uniform(1.0, 3.0),
                vec![xp_bottles(ns, 3), enchanted_books(ns), shulker_shell(ns, 2)],
            ),
            LootPool::new(
                uniform(1.0, 2.0),
                vec![diamonds(ns, 2), netherite_scraps(ns, 2)],
            ),
            head_pool(vec![wither_skeleton_skull(ns)]),
            potions_pool(ns, 1.0, 3.0),
        ],
    )
}

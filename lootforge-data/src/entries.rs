//! Constructors for every entry the tiers draw from.
//!
//! Count ranges and the `factor` scaling are balance tuning carried
//! over verbatim from the shipped table set; a `factor` of 1 is the
//! baseline. Note that several valuables scale only their upper bound.

use lootforge_loot::{LootPool, LootPoolEntry};
use lootforge_util::Namespaces;

// Sub-tables generated alongside the tiers, referenced by name.

pub fn food_pool(ns: &Namespaces, min: f32, max: f32) -> LootPool {
    LootPool::delegate(ns.owned("food"), min, max)
}

pub fn potions_pool(ns: &Namespaces, min: f32, max: f32) -> LootPool {
    LootPool::delegate(ns.owned("potions"), min, max)
}

pub fn wood_logs(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::table(ns.owned("wood_logs")).count(factor as f32 * 15.0, factor as f32 * 30.0)
}

pub fn explorer_map(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::table(ns.owned("explorer_maps"))
}

// Building materials.

pub fn sand(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("sand")).count(factor as f32 * 20.0, factor as f32 * 40.0)
}

pub fn clay_balls(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("clay_ball")).count(factor as f32 * 30.0, factor as f32 * 100.0)
}

pub fn glowstone_dust(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("glowstone_dust"))
        .count(factor as f32 * 15.0, factor as f32 * 30.0)
}

pub fn lapis_lazuli(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("lapis_lazuli")).count(factor as f32 * 30.0, factor as f32 * 80.0)
}

pub fn quartz(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("quartz")).count(factor as f32 * 30.0, factor as f32 * 80.0)
}

pub fn lantern(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("lantern")).count(factor as f32 * 4.0, factor as f32 * 10.0)
}

pub fn vine(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("vine"))
}

pub fn blue_ice(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("blue_ice")).count(factor as f32 * 5.0, factor as f32 * 64.0)
}

pub fn obsidian(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("obsidian")).count(factor as f32 * 3.0, factor as f32 * 15.0)
}

// Combat gear. The armor and tool sets are drawn piece by piece; the
// enchanted variants add the standard enchantment plus wear.

pub const IRON_GEAR: [&str; 8] = [
    "iron_helmet",
    "iron_chestplate",
    "iron_leggings",
    "iron_boots",
    "iron_axe",
    "iron_pickaxe",
    "iron_shovel",
    "iron_sword",
];

pub const DIAMOND_GEAR: [&str; 8] = [
    "diamond_helmet",
    "diamond_chestplate",
    "diamond_leggings",
    "diamond_boots",
    "diamond_axe",
    "diamond_pickaxe",
    "diamond_shovel",
    "diamond_sword",
];

pub const NETHERITE_GEAR: [&str; 8] = [
    "netherite_helmet",
    "netherite_chestplate",
    "netherite_leggings",
    "netherite_boots",
    "netherite_axe",
    "netherite_pickaxe",
    "netherite_shovel",
    "netherite_sword",
];

pub fn plain_set(ns: &Namespaces, pieces: &[&str]) -> Vec<LootPoolEntry> {
    pieces
        .iter()
        .map(|piece| LootPoolEntry::item(ns.vanilla(piece)))
        .collect()
}

pub fn enchanted_set(ns: &Namespaces, pieces: &[&str], factor: i32) -> Vec<LootPoolEntry> {
    pieces
        .iter()
        .map(|piece| LootPoolEntry::item(ns.vanilla(piece)).enchanted().worn(factor))
        .collect()
}

pub fn arrows(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("arrow")).count(factor as f32 * 10.0, factor as f32 * 30.0)
}

pub fn shield(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("shield"))
}

pub fn totem_of_undying(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("totem_of_undying"))
}

pub fn elytra(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("elytra"))
}

pub fn firework_rockets(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("firework_rocket")).count(10.0, 30.0)
}

// Utility and treasure items.

pub fn saddle(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("saddle"))
}

pub fn name_tag(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("name_tag"))
}

pub fn xp_bottles(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("experience_bottle")).count(5.0, factor as f32 * 15.0)
}

pub fn enchanted_books(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("book")).count(1.0, 3.0).enchanted()
}

pub fn ender_pearl(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("ender_pearl")).count(1.0, 5.0)
}

pub fn blaze_rod(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("blaze_rod")).count(1.0, 10.0)
}

pub fn shulker_shell(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("shulker_shell")).count(1.0, factor as f32 * 3.0)
}

// Ores and currency.

pub fn leather(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("leather")).count(5.0, 20.0)
}

pub fn emerald(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("emerald")).count(factor as f32 * 5.0, factor as f32 * 15.0)
}

pub fn coal(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("coal")).count(20.0, 40.0)
}

pub fn iron_ingots(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("iron_ingot")).count(factor as f32 * 5.0, factor as f32 * 20.0)
}

pub fn gold_ingots(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("gold_ingot")).count(5.0, 10.0)
}

pub fn diamonds(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("diamond")).count(1.0, factor as f32 * 3.0)
}

pub fn netherite_scraps(ns: &Namespaces, factor: i32) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("netherite_scrap")).count(1.0, factor as f32 * 10.0)
}

// Mob heads, only ever behind the chance-gated head pool.

pub fn zombie_head(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("zombie_head"))
}

pub fn skeleton_skull(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("skeleton_skull"))
}

pub fn wither_skeleton_skull(ns: &Namespaces) -> LootPoolEntry {
    LootPoolEntry::item(ns.vanilla("wither_skeleton_skull"))
}

use std::env;
use std::path::Path;

use lootforge_config::{Configuration, LoadConfiguration, LoggingConfig};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

mod custom;
mod generator;
mod menu;

use menu::Menu;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let exec_dir = env::current_dir().expect("Failed to resolve the working directory");
    let config = Configuration::load(&exec_dir);
    init_log(&config.logging);

    log::info!("Starting lootforge {CARGO_PKG_VERSION}");

    select_mode(&config, &exec_dir);
}

fn init_log(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let mut builder = ConfigBuilder::new();
    if !config.timestamp {
        builder.set_time_level(LevelFilter::Off);
    }
    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    TermLogger::init(
        LevelFilter::Info,
        builder.build(),
        TerminalMode::Mixed,
        color,
    )
    .expect("Another logger was already initialized");
}

fn select_mode(config: &Configuration, exec_dir: &Path) {
    let main_menu = Menu::new(
        "Select mode",
        &["Exit", "Generate loot tables", "Add items"],
    );
    loop {
        match main_menu.prompt() {
            0 => return,
            1 => generate(config),
            2 => add_items(config, exec_dir),
            _ => unreachable!("the menu only returns listed choices"),
        }
    }
}

fn generate(config: &Configuration) {
    log::info!("Generating loot tables");
    let tables = lootforge_data::catalog(&config.namespaces());
    if let Err(err) = generator::write_tables(&tables, &config.output_path) {
        log::error!("Generating loot tables failed: {err}");
        std::process::exit(1);
    }
    log::info!("Finished generating loot tables");
}

fn add_items(config: &Configuration, exec_dir: &Path) {
    let item_menu = Menu::new(
        "Select item",
        &["Exit", "Back", "Add item", "Add ranged item"],
    );
    loop {
        match item_menu.prompt() {
            0 => std::process::exit(0),
            1 => return,
            2 => add_item(config, exec_dir, false),
            3 => add_item(config, exec_dir, true),
            _ => unreachable!("the menu only returns listed choices"),
        }
    }
}

/// Register one new item definition. Bad numeric input abandons the
/// operation and falls back to the menu.
fn add_item(config: &Configuration, exec_dir: &Path, ranged: bool) {
    let Some(name) = menu::ask("Enter name of new item (i.e. blue_ice):") else {
        return;
    };
    if name.is_empty() {
        return;
    }

    let (min, max) = if ranged {
        let Some(min) = menu::ask_int("Enter min:") else {
            return;
        };
        let Some(max) = menu::ask_int("Enter max:") else {
            return;
        };
        (Some(min), Some(max))
    } else {
        (None, None)
    };

    let item = custom::CustomItem { name, min, max };
    let path = exec_dir.join(custom::REGISTRY_FILE);
    if let Err(err) = custom::append(&path, item.clone()) {
        log::error!("Registering the item failed: {err}");
        std::process::exit(1);
    }

    let entry = item.to_entry(&config.namespaces());
    let preview = serde_json::to_string(&entry).expect("a loot entry always serializes");
    log::info!("Registered {preview}");
}

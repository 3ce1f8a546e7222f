use log::warn;
use lootforge_util::Namespaces;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::path::PathBuf;
use std::{fs, path::Path};

pub mod logging;

pub use logging::LoggingConfig;

const CONFIG_FILE: &str = "lootforge.toml";

/// Where the generated tables go and which namespaces they refer into.
///
/// The defaults match the table set this tool ships; overriding the
/// namespaces retargets every generated reference at once.
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// Directory receiving one JSON file per generated table.
    pub output_path: PathBuf,
    /// Namespace of the sub-tables this tool generates itself.
    pub namespace: String,
    /// Namespace of the vanilla item identifiers.
    pub game_namespace: String,
    pub logging: LoggingConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("generated_loot_tables"),
            namespace: "baseraids".to_string(),
            game_namespace: "minecraft".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Configuration {
    pub fn namespaces(&self) -> Namespaces {
        Namespaces::new(&self.namespace, &self.game_namespace)
    }
}

pub trait LoadConfiguration {
    fn load(exec_dir: &Path) -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = exec_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", &path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update; just delete the old config and start again",
                    &path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(&path, toml::to_string(&content).unwrap()) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}",
                    &path, err
                );
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadConfiguration for Configuration {
    fn get_path() -> &'static Path {
        Path::new(CONFIG_FILE)
    }

    fn validate(&self) {
        for namespace in [&self.namespace, &self.game_namespace] {
            assert!(!namespace.is_empty(), "Namespaces must not be empty");
            assert!(
                !namespace.contains(':'),
                "Namespaces must not contain ':' (got {namespace:?})"
            );
        }
        assert!(
            !self.output_path.as_os_str().is_empty(),
            "Output path must not be empty"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        Configuration::default().validate();
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let written = toml::to_string(&Configuration::default()).unwrap();
        let read: Configuration = toml::from_str(&written).unwrap();
        assert_eq!(read.namespace, "baseraids");
        assert_eq!(read.game_namespace, "minecraft");
        assert_eq!(read.output_path, PathBuf::from("generated_loot_tables"));
        assert!(read.logging.enabled);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let read: Configuration = toml::from_str("namespace = \"myraids\"").unwrap();
        assert_eq!(read.namespace, "myraids");
        assert_eq!(read.game_namespace, "minecraft");
    }

    #[test]
    fn load_writes_the_default_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = Configuration::load(dir.path());
        assert_eq!(config.namespace, "baseraids");
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    #[should_panic(expected = "must not contain ':'")]
    fn qualified_namespace_is_rejected() {
        let config = Configuration {
            namespace: "base:raids".to_string(),
            ..Configuration::default()
        };
        config.validate();
    }

    #[test]
    fn namespaces_come_from_the_config() {
        let ns = Configuration::default().namespaces();
        assert_eq!(ns.owned("potions").as_str(), "baseraids:potions");
        assert_eq!(ns.vanilla("coal").as_str(), "minecraft:coal");
    }
}

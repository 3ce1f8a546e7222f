use std::fmt;

use serde::Serialize;

/// A namespace-qualified identifier, e.g. `minecraft:coal`.
///
/// The qualified form is fixed at construction; the game rejects bare
/// names, so an unqualified or empty `ResourceName` cannot exist.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(namespace: &str, path: &str) -> Self {
        assert!(!namespace.is_empty(), "Resource namespace must not be empty");
        assert!(!path.is_empty(), "Resource path must not be empty");
        Self(format!("{namespace}:{path}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two namespaces a generated table may refer into.
///
/// `custom` holds the sub-tables this tool generates itself (`food`,
/// `potions`, ...), `game` holds the vanilla item identifiers. Both
/// come from the configuration and are threaded through catalog
/// construction.
#[derive(Clone, Debug)]
pub struct Namespaces {
    custom: String,
    game: String,
}

impl Namespaces {
    pub fn new(custom: impl Into<String>, game: impl Into<String>) -> Self {
        Self {
            custom: custom.into(),
            game: game.into(),
        }
    }

    /// Qualify the name of a sub-table owned by this tool.
    pub fn owned(&self, path: &str) -> ResourceName {
        ResourceName::new(&self.custom, path)
    }

    /// Qualify a vanilla item identifier.
    pub fn vanilla(&self, path: &str) -> ResourceName {
        ResourceName::new(&self.game, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_form() {
        let name = ResourceName::new("minecraft", "coal");
        assert_eq!(name.as_str(), "minecraft:coal");
        assert_eq!(name.to_string(), "minecraft:coal");
    }

    #[test]
    fn namespaces_pick_the_right_half() {
        let ns = Namespaces::new("baseraids", "minecraft");
        assert_eq!(ns.owned("food").as_str(), "baseraids:food");
        assert_eq!(ns.vanilla("iron_sword").as_str(), "minecraft:iron_sword");
    }

    #[test]
    #[should_panic(expected = "path must not be empty")]
    fn empty_path_is_rejected() {
        let _ = ResourceName::new("minecraft", "");
    }
}

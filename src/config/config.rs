use crate::culture::Culture;
use crate::size::{ByteSizeError, UnitSystem};
use crate::text::DEFAULT_TEMPLATE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "bytesize.toml";

/// Settings for the `bytesize` tool, read from `bytesize.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Locale used when no --culture flag is given
    #[serde(default = "default_culture")]
    pub culture: String,

    // Display binary (KiB, MiB, ...) instead of decimal units
    #[serde(default)]
    pub binary: bool,

    #[serde(default = "default_template")]
    pub template: String,

    // Extra cultures defined by their separators, e.g.
    // [cultures.swiss]
    // decimal_separator = "."
    // group_separator = "'"
    #[serde(default)]
    pub cultures: HashMap<String, Culture>,
}

fn default_culture() -> String {
    "invariant".to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config: Config = toml::from_str(content)?;
        // Table keys name the custom cultures
        for (name, culture) in config.cultures.iter_mut() {
            if culture.name.is_empty() {
                culture.name = name.clone();
            }
        }
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            culture: default_culture(),
            binary: false,
            template: default_template(),
            cultures: HashMap::new(),
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        if self.binary {
            UnitSystem::Binary
        } else {
            UnitSystem::Decimal
        }
    }

    /// Resolve a culture name (case-insensitive), custom cultures first, then
    /// the built-in table. `None` resolves the configured default culture.
    pub fn resolve_culture(&self, name: Option<&str>) -> Result<Culture, ByteSizeError> {
        let name = name.unwrap_or(&self.culture).trim();
        let custom = self
            .cultures
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, culture)| culture.clone());

        match custom {
            Some(culture) => Ok(culture),
            None => Culture::from_name(name),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config() {
        let config = Config::empty();
        assert_eq!(config.culture, "invariant");
        assert_eq!(config.template, "0.##");
        assert_eq!(config.unit_system(), UnitSystem::Decimal);
        assert_eq!(config.resolve_culture(None).unwrap(), Culture::invariant());
    }

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
culture = "de-DE"
binary = true
template = "0.0"

[cultures.swiss]
decimal_separator = "."
group_separator = "'"
"#,
        )
        .unwrap();

        assert_eq!(config.unit_system(), UnitSystem::Binary);
        assert_eq!(config.template, "0.0");

        let default = config.resolve_culture(None).unwrap();
        assert_eq!(default.decimal_separator, ',');

        let swiss = config.resolve_culture(Some("swiss")).unwrap();
        assert_eq!(swiss, Culture::new("swiss", '.', '\''));

        assert!(matches!(
            config.resolve_culture(Some("nowhere")),
            Err(ByteSizeError::UnknownCulture(_))
        ));
    }

    #[test]
    fn test_custom_culture_names_ignore_case() {
        let config = Config::load_from_str(
            r#"
culture = "Swiss"

[cultures.swiss]
decimal_separator = "."
group_separator = "'"
"#,
        )
        .unwrap();

        let swiss = Culture::new("swiss", '.', '\'');
        assert_eq!(config.resolve_culture(Some("SWISS")).unwrap(), swiss);
        assert_eq!(config.resolve_culture(Some("Swiss")).unwrap(), swiss);
        assert_eq!(config.resolve_culture(None).unwrap(), swiss);
        // Built-in names still resolve through the culture table
        assert_eq!(config.resolve_culture(Some("DE-de")).unwrap().decimal_separator, ',');
    }

    #[test]
    fn test_load_defaults_for_missing_keys() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.culture, "invariant");
        assert!(!config.binary);
        assert!(config.cultures.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "culture = \"fr-FR\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        let culture = config.resolve_culture(None).unwrap();
        assert_eq!(culture.name, "fr-FR");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        assert!(Config::load_from_str("binary = \"maybe\"").is_err());
        assert!(Config::load_from_file("/definitely/not/here/bytesize.toml").is_err());
    }
}

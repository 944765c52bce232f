use docmerge_engine::{RelationRule, RelationTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Paths for one merge run plus the relation rules between object types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub template_path: PathBuf,
    pub data_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationRule>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        for path in [
            &mut config.template_path,
            &mut config.data_path,
            &mut config.output_path,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docmerge");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The configured rules as a relation the merge can query.
    pub fn relation_table(&self) -> RelationTable {
        RelationTable::new(self.relations.clone())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmerge_engine::merge::RelationKind;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    fn sample_config() -> Config {
        Config {
            template_path: PathBuf::from("/tmp/templates/release.json"),
            data_path: PathBuf::from("/tmp/data/release.json"),
            output_path: PathBuf::from("/tmp/out/release.md"),
            relations: vec![RelationRule {
                from: "req".to_string(),
                to: "need".to_string(),
                kind: RelationKind::Reference {
                    field: "user_need".to_string(),
                    target_field: "number".to_string(),
                    prefix: "#".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/docmerge/config.toml"));
    }

    #[test]
    fn test_parse_relations_from_toml() {
        let config_content = r##"
template_path = "/t.json"
data_path = "/d.json"
output_path = "/o.json"

[[relations]]
from = "req"
to = "need"
kind = "reference"
field = "user_need"
target_field = "number"
prefix = "#"

[[relations]]
from = "design"
to = "req"
kind = "membership"
field = "number"
target_field = "design_outputs"
"##;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.relations.len(), 2);
        assert_eq!(config.relations[0], sample_config().relations[0]);
        assert_eq!(
            config.relations[1].kind,
            RelationKind::Membership {
                field: "number".to_string(),
                target_field: "design_outputs".to_string(),
            }
        );
    }

    #[test]
    fn test_relations_default_to_empty() {
        let config: Config = toml::from_str(
            r#"
template_path = "/t.json"
data_path = "/d.json"
output_path = "/o.json"
"#,
        )
        .unwrap();
        assert!(config.relations.is_empty());
        assert_eq!(config.relation_table(), RelationTable::default());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DOCMERGE_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$DOCMERGE_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("DOCMERGE_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        assert_eq!(Config::expand_path(&path), Some(path));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "template_path = ").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = sample_config();

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_loaded_paths_are_expanded() {
        unsafe {
            env::set_var("DOCMERGE_RELEASE_DIR", "/srv/release");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
template_path = "$DOCMERGE_RELEASE_DIR/template.json"
data_path = "$DOCMERGE_RELEASE_DIR/data.json"
output_path = "~/release.md"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.template_path,
            PathBuf::from("/srv/release/template.json")
        );
        assert_eq!(config.data_path, PathBuf::from("/srv/release/data.json"));
        assert!(!config.output_path.to_string_lossy().starts_with('~'));

        unsafe {
            env::remove_var("DOCMERGE_RELEASE_DIR");
        }
    }
}

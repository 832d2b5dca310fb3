use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const LOCAL_CONFIG_FILE: &str = "exgen.json";

/// Project identity and file locations. Every field has a default, so a
/// config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub base_package: String,
    pub junit_version: String,
    pub surefire_version: String,
    pub project_title: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("exercises.yml"),
            output_dir: PathBuf::from("."),
            group_id: "org.javamastery".to_string(),
            artifact_id: "java-mastery-exercises".to_string(),
            version: "1.0-SNAPSHOT".to_string(),
            base_package: "org.javamastery".to_string(),
            junit_version: "5.10.0".to_string(),
            surefire_version: "3.0.0".to_string(),
            project_title: "Java Mastery Exercises".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn exercises_dir(&self) -> PathBuf {
        self.output_dir.join(EXERCISES_DIR)
    }

    pub fn module_package(&self, id: &str) -> String {
        format!("{}.ex{}", self.base_package, id)
    }
}

/// Directory under the output root holding one sub-directory per module.
pub const EXERCISES_DIR: &str = "exercises";

pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("exgen").join("config.json"))
}

/// `./exgen.json`, then the user config file, then defaults.
pub fn load_config() -> GeneratorConfig {
    let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)).chain(get_user_config_path());
    for path in candidates {
        if let Some(config) = load_config_from(&path) {
            return config;
        }
    }
    GeneratorConfig::default()
}

/// `None` when the file is absent. An unreadable or invalid file logs a
/// warning and yields defaults.
pub fn load_config_from(path: &Path) -> Option<GeneratorConfig> {
    if !path.exists() {
        return None;
    }

    let config = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Ignoring invalid config {}: {}", path.display(), e);
            GeneratorConfig::default()
        }),
        Err(e) => {
            warn!("Failed to read config {}: {}", path.display(), e);
            GeneratorConfig::default()
        }
    };
    debug!("Loaded config from {}", path.display());
    Some(config)
}

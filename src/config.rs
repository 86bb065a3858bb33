// ⚙️ Configuration - File paths and account defaults for the demo programs
//
// Precedence: built-in defaults < JSON config file < environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_INVENTORY_PATH: &str = "RECORDKEEPER_INVENTORY_PATH";
pub const ENV_STUDENTS_PATH: &str = "RECORDKEEPER_STUDENTS_PATH";
pub const ENV_REPORT_PATH: &str = "RECORDKEEPER_REPORT_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file used by the inventory logger
    pub inventory_path: PathBuf,

    /// Student score input file
    pub students_path: PathBuf,

    /// Graded report output file
    pub report_path: PathBuf,

    pub account_number: String,
    pub opening_balance: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            inventory_path: PathBuf::from("inventory.json"),
            students_path: PathBuf::from("students.txt"),
            report_path: PathBuf::from("report.txt"),
            account_number: "123456".to_string(),
            opening_balance: 1000.0,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file; missing keys fall back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// Override paths from `RECORDKEEPER_*` environment variables
    pub fn apply_env(mut self) -> Self {
        self.apply_overrides(|key| env::var(key).ok());
        self
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_INVENTORY_PATH) {
            self.inventory_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_STUDENTS_PATH) {
            self.students_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_REPORT_PATH) {
            self.report_path = PathBuf::from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!(
            "recordkeeper-{}-config.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "report_path": "out/grades.txt", "opening_balance": 250.5 }"#)
            .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();

        assert_eq!(config.report_path, PathBuf::from("out/grades.txt"));
        assert_eq!(config.opening_balance, 250.5);
        assert_eq!(config.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(config.account_number, "123456");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file_errors() {
        assert!(AppConfig::load_from_file("/nonexistent/recordkeeper.json").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_INVENTORY_PATH, "/data/items.json"),
            (ENV_STUDENTS_PATH, "/data/students.txt"),
        ]);

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.inventory_path, PathBuf::from("/data/items.json"));
        assert_eq!(config.students_path, PathBuf::from("/data/students.txt"));
        assert_eq!(config.report_path, PathBuf::from("report.txt"));
    }
}

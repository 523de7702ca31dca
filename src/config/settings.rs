//! User settings for finance-tracker
//!
//! Holds the monthly budget, the ledger source location, display preferences,
//! and the categorization catalog. Every field has a default, so a partial
//! `config.json` is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::{Catalog, Money};
use crate::storage::{read_json, write_json_atomic};

/// User settings for finance-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly budget shared by every month
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Ledger CSV source; `data/finances.csv` under the base dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category and source tables used to categorize new expenses
    #[serde(default)]
    pub catalog: Catalog,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    Money::from_cents(500_000)
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            source_file: None,
            currency_symbol: default_currency(),
            catalog: Catalog::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings: Settings = read_json(paths.settings_file())?;
        // Don't save yet - let caller decide when to persist
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the ledger source location
    pub fn source_path(&self, paths: &FinancePaths) -> PathBuf {
        self.source_file
            .clone()
            .unwrap_or_else(|| paths.default_source_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_budget.cents(), 500000);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.catalog, Catalog::default());
        assert!(settings.source_file.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.source_path(&paths),
            paths.default_source_file()
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            monthly_budget: Money::from_cents(325000),
            source_file: Some(PathBuf::from("/srv/ledger.csv")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_budget.cents(), 325000);
        assert_eq!(loaded.source_path(&paths), PathBuf::from("/srv/ledger.csv"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"monthly_budget": 4200.5}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_budget.cents(), 420050);
        assert_eq!(loaded.catalog.categories.len(), 15);
    }
}

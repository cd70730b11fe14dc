use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::catalog::DEFAULT_LOCALE;

pub const CONFIG_FILE_NAME: &str = ".langsweeprc.json";

/// Dotted Lua identifier, e.g. `MyAddon` or `GM.Hud`.
static TABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Table the catalog is attached to (`<table>.Lang`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Folder to fetch sentences from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
}

fn default_output_dir() -> String {
    "./translated".to_string()
}

fn default_catalog_file() -> String {
    "./languages.lua".to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: None,
            source_root: None,
            output_dir: default_output_dir(),
            catalog_file: default_catalog_file(),
            locale: default_locale(),
            ignores: Vec::new(),
            extensions: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern in `ignores` is invalid, or if
    /// `table` or `locale` cannot be emitted into the catalog file.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if let Some(table) = &self.table {
            validate_table_name(table).context("Invalid 'table' in config")?;
        }

        validate_locale(&self.locale).context("Invalid 'locale' in config")?;

        Ok(())
    }
}

/// Check that `name` can be used as `<name>.Lang` and `<name>:GetLang()`.
pub fn validate_table_name(name: &str) -> Result<()> {
    if !TABLE_NAME_REGEX.is_match(name) {
        bail!(
            "\"{}\" is not a valid table name (expected an identifier like MyAddon or GM.Hud)",
            name
        );
    }
    Ok(())
}

/// Check that `locale` can be embedded in a quoted table key.
pub fn validate_locale(locale: &str) -> Result<()> {
    if locale.is_empty() || locale.contains(['"', '\\', '\n', '\r']) {
        bail!("\"{}\" is not a valid locale key", locale);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

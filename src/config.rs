//! Configuration file support for update-checker.
//!
//! Provides YAML-based configuration through `update-checker.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Args;
use update_checker::adapters::outbound::network::{
    DEFAULT_CACHE_FILE, DEFAULT_MAX_AGE_DAYS, DEFAULT_VERGRABBER_URL,
};
use update_checker::application::dto::OutputFormat;
use update_checker::application::factories::CatalogSourceType;
use update_checker::shared::Result;

pub const CONFIG_FILENAME: &str = "update-checker.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub catalog_url: Option<String>,
    pub cache_file: Option<PathBuf>,
    pub max_catalog_age_days: Option<i64>,
    pub ignore_prefixes: Option<Vec<String>>,
    pub show_unknown: Option<bool>,
    pub fail_on_outdated: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(days) = config.max_catalog_age_days {
        if days <= 0 {
            bail!(
                "Invalid config: max_catalog_age_days must be greater than 0, got {}.\n\n\
                 💡 Hint: The default is {} days.",
                days,
                DEFAULT_MAX_AGE_DAYS
            );
        }
    }

    if let Some(ref prefixes) = config.ignore_prefixes {
        for (i, prefix) in prefixes.iter().enumerate() {
            if prefix.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_prefixes[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is the start of a display name (e.g., \"Microsoft Visual C++\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings of one run.
///
/// Scalars follow CLI flag > config file > built-in default. Ignore prefixes
/// from the config file and the command line are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory: PathBuf,
    pub catalog: CatalogSourceType,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub show_unknown: bool,
    pub ignore_prefixes: Vec<String>,
    pub fail_on_outdated: bool,
    pub no_color: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format)
                .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?,
            (None, None) => OutputFormat::default(),
        };

        let max_age_days = args
            .max_age_days
            .or(config.max_catalog_age_days)
            .unwrap_or(DEFAULT_MAX_AGE_DAYS);
        if max_age_days <= 0 {
            bail!(
                "--max-age-days must be greater than 0, got {}",
                max_age_days
            );
        }

        let catalog = match &args.catalog {
            Some(path) => CatalogSourceType::File(path.clone()),
            None => CatalogSourceType::Remote {
                url: args
                    .catalog_url
                    .clone()
                    .or(config.catalog_url)
                    .unwrap_or_else(|| DEFAULT_VERGRABBER_URL.to_string()),
                cache_file: args
                    .cache_file
                    .clone()
                    .or(config.cache_file)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE)),
                max_age_days,
            },
        };

        let mut ignore_prefixes = config.ignore_prefixes.unwrap_or_default();
        ignore_prefixes.extend(args.ignore.iter().cloned());

        Ok(Self {
            inventory: args.inventory.clone(),
            catalog,
            format,
            output: args.output.clone(),
            show_unknown: args.show_unknown || config.show_unknown.unwrap_or(false),
            ignore_prefixes,
            fail_on_outdated: args.fail_on_outdated || config.fail_on_outdated.unwrap_or(false),
            no_color: args.no_color,
        })
    }
}

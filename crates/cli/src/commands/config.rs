use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use facecut_core::config::LoadOptions;
use serde::Serialize;
use toml::Value;

use crate::commands::{load_config, CommandResult};

#[derive(Debug, Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
    source: String,
}

pub fn run() -> CommandResult {
    let config = match load_config("config", LoadOptions::default()) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let catalog_path = config
        .catalog
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<built-in>".to_string());

    let entries = vec![
        ConfigEntry {
            key: "catalog.path",
            value: catalog_path,
            source: source("catalog.path", &["FACECUT_CATALOG_PATH"]),
        },
        ConfigEntry {
            key: "tiering.free_limit",
            value: config.tiering.free_limit.to_string(),
            source: source("tiering.free_limit", &["FACECUT_TIERING_FREE_LIMIT"]),
        },
        ConfigEntry {
            key: "scoring.base",
            value: config.scoring.base.to_string(),
            source: source("scoring.base", &["FACECUT_SCORING_BASE"]),
        },
        ConfigEntry {
            key: "scoring.shape_bonus",
            value: config.scoring.shape_bonus.to_string(),
            source: source("scoring.shape_bonus", &["FACECUT_SCORING_SHAPE_BONUS"]),
        },
        ConfigEntry {
            key: "scoring.length_bonus",
            value: config.scoring.length_bonus.to_string(),
            source: source("scoring.length_bonus", &["FACECUT_SCORING_LENGTH_BONUS"]),
        },
        ConfigEntry {
            key: "scoring.maintenance_step",
            value: config.scoring.maintenance_step.to_string(),
            source: source("scoring.maintenance_step", &["FACECUT_SCORING_MAINTENANCE_STEP"]),
        },
        ConfigEntry {
            key: "logging.level",
            value: config.logging.level.clone(),
            source: source("logging.level", &["FACECUT_LOGGING_LEVEL", "FACECUT_LOG_LEVEL"]),
        },
        ConfigEntry {
            key: "logging.format",
            value: config.logging.format.as_str().to_string(),
            source: source("logging.format", &["FACECUT_LOGGING_FORMAT", "FACECUT_LOG_FORMAT"]),
        },
    ];

    CommandResult::success_with_data(
        "config",
        "effective config (source precedence: env > file > default)",
        &entries,
    )
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("facecut.toml"), PathBuf::from("config/facecut.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let from_env = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = from_env {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

//! Configuration loading.
//!
//! Config is read from a single user-level file:
//! `~/.config/termdeck/config.toml`
//!
//! Supports overriding the storage root and the shell key bindings. Uses
//! TOML format with serde; a missing or malformed file falls back to
//! defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_QUIT: &str = "q";
const DEFAULT_FOCUS_CLI: &str = ":";
const DEFAULT_CLEAR: &str = "esc";

#[derive(Debug, Clone)]
pub struct Config {
    pub keymap: KeymapConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub quit: String,
    pub focus_cli: String,
    pub clear: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub root: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    keymap: Option<RawKeymap>,
    storage: Option<RawStorage>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    quit: Option<String>,
    #[serde(alias = "focusCli")]
    focus_cli: Option<String>,
    clear: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStorage {
    root: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    toml::from_str::<RawConfig>(&contents).ok()
}

fn merge_config(user: Option<RawConfig>) -> Config {
    let keymap = user.as_ref().and_then(|config| config.keymap.as_ref());
    let quit = keymap
        .and_then(|k| k.quit.clone())
        .unwrap_or_else(|| DEFAULT_QUIT.to_string());
    let focus_cli = keymap
        .and_then(|k| k.focus_cli.clone())
        .unwrap_or_else(|| DEFAULT_FOCUS_CLI.to_string());
    let clear = keymap
        .and_then(|k| k.clear.clone())
        .unwrap_or_else(|| DEFAULT_CLEAR.to_string());

    let root = user
        .as_ref()
        .and_then(|config| config.storage.as_ref())
        .and_then(|storage| storage.root.clone())
        .map(PathBuf::from)
        .unwrap_or_else(default_storage_root);

    Config {
        keymap: KeymapConfig {
            quit,
            focus_cli,
            clear,
        },
        storage: StorageConfig { root },
    }
}

fn default_storage_root() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("termdeck"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("termdeck").join("config.toml"))
}

pub fn load_config() -> Config {
    let user_config = config_path().and_then(|path| read_toml(&path));
    merge_config(user_config)
}

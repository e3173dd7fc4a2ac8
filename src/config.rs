use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nauditrc.json";

pub const DEFAULT_FILES: &[&str] = &[
    "features/auth/screens/RegisterScreen.tsx",
    "features/auth/screens/ForgotPasswordScreen.tsx",
    "app/(tabs)/index.tsx",
    "app/(tabs)/cases.tsx",
    "app/(tabs)/documents.tsx",
    "app/(tabs)/messages.tsx",
    "app/(tabs)/profile.tsx",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_import_statement")]
    pub import_statement: String,
    #[serde(default = "default_hook_statement")]
    pub hook_statement: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_excluded_prefixes")]
    pub excluded_prefixes: Vec<char>,
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    #[serde(default = "default_guide_file")]
    pub guide_file: String,
    /// Extra mapping entries layered over the built-in table.
    #[serde(default)]
    pub mappings: HashMap<String, String>,
}

fn default_app_name() -> String {
    "Patrick Travel Services Mobile".to_string()
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
}

fn default_marker() -> String {
    "useTranslation".to_string()
}

fn default_import_statement() -> String {
    "import { useTranslation } from 'react-i18next';".to_string()
}

fn default_hook_statement() -> String {
    "const { t } = useTranslation();".to_string()
}

fn default_min_length() -> usize {
    2
}

fn default_excluded_prefixes() -> Vec<char> {
    vec!['/', '#']
}

fn default_preview_limit() -> usize {
    5
}

fn default_guide_file() -> String {
    "I18N_IMPLEMENTATION.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            files: default_files(),
            marker: default_marker(),
            import_statement: default_import_statement(),
            hook_statement: default_hook_statement(),
            min_length: default_min_length(),
            excluded_prefixes: default_excluded_prefixes(),
            preview_limit: default_preview_limit(),
            guide_file: default_guide_file(),
            mappings: HashMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            bail!("'marker' must not be empty");
        }
        if self.preview_limit == 0 {
            bail!("'previewLimit' must be at least 1");
        }
        if let Some(pos) = self.files.iter().position(|f| f.trim().is_empty()) {
            bail!("Empty path in 'files' at index {}", pos);
        }
        for key in self.mappings.keys() {
            if !is_quoted(key) {
                bail!(
                    "Mapping key must include its double quotes, got: {}",
                    key
                );
            }
        }
        Ok(())
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(PathBuf::from).collect()
    }
}

fn is_quoted(key: &str) -> bool {
    key.len() >= 2 && key.starts_with('"') && key.ends_with('"')
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

pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: read_config(&path)?,
            from_file: true,
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

use crate::error::{Result, TriviaError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const CONFIG_FILE_NAME: &str = ".trivia.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TriviaConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_categories_path")]
    pub categories_path: String,

    #[serde(default = "default_questions_path")]
    pub questions_path: String,

    /// Keep cookies between requests so writes carry the session.
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,

    /// Zero disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_categories_path() -> String {
    "/categories".to_string()
}

fn default_questions_path() -> String {
    "/questions".to_string()
}

fn default_with_credentials() -> bool {
    true
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            categories_path: default_categories_path(),
            questions_path: default_questions_path(),
            with_credentials: default_with_credentials(),
            timeout_secs: 0,
        }
    }
}

impl ApiSettings {
    /// Parsed base URL, normalized to end with a slash so joins keep any prefix path.
    pub fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if raw.is_empty() {
            return Err(TriviaError::Config("api.base_url is empty".to_string()));
        }
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)?;
        if url.cannot_be_a_base() {
            return Err(TriviaError::Config(format!(
                "api.base_url cannot be used as a base: {}",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base()?.join(path.trim_start_matches('/'))?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TuiSettings {
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_show_hints() -> bool {
    true
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            show_hints: default_show_hints(),
        }
    }
}

impl TriviaConfig {
    /// Load the nearest config file above `start_path`, or defaults when there is none.
    pub fn load(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: TriviaConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

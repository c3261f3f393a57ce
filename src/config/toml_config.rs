use crate::domain::model::PathLayout;
use crate::utils::error::{CellBaseError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const DEFAULT_HOST: &str = "https://ws.zettagenomics.com/cellbase";
pub const DEFAULT_VERSION: &str = "v5";
pub const DEFAULT_SPECIES: &str = "hsapiens";

/// Connection settings shared by every client built from one `CellBaseClient`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub version: String,
    pub species: String,
    pub timeout_seconds: Option<u64>,
    pub path_layout: PathLayout,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
            species: DEFAULT_SPECIES.to_string(),
            timeout_seconds: None,
            path_layout: PathLayout::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CellBaseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a TOML document after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CellBaseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CellBaseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_path_layout(mut self, path_layout: PathLayout) -> Self {
        self.path_layout = path_layout;
        self
    }

    /// `{host}/webservices/rest/{version}/{species}/`
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.host).map_err(|e| CellBaseError::InvalidConfigValueError {
            field: "host".to_string(),
            value: self.host.clone(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        url.path_segments_mut()
            .map_err(|_| CellBaseError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(["webservices", "rest", self.version.as_str(), self.species.as_str()])
            .push("");

        Ok(url)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("host", &self.host)?;
        validation::validate_path_segment("version", &self.version)?;
        validation::validate_path_segment("species", &self.species)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

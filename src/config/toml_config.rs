use crate::domain::model::{BirthForm, PartnerInput};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `[server]` 區段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub page_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// `[output]` 區段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub print: Option<bool>,
}

/// Coordinates may be written as TOML numbers or as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    pub fn as_input(&self) -> String {
        match self {
            Coordinate::Text(s) => s.clone(),
            Coordinate::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnerProfile {
    pub dob: Option<String>,
    pub tob: Option<String>,
    pub lat: Option<Coordinate>,
    pub lon: Option<Coordinate>,
}

impl PartnerProfile {
    /// Fills the fields this profile sets, leaving the others alone.
    pub fn apply_to(&self, input: &mut PartnerInput) {
        if let Some(dob) = &self.dob {
            input.dob = dob.clone();
        }
        if let Some(tob) = &self.tob {
            input.tob = tob.clone();
        }
        if let Some(lat) = &self.lat {
            input.lat = lat.as_input();
        }
        if let Some(lon) = &self.lon {
            input.lon = lon.as_input();
        }
    }
}

/// Birth details profile loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub male: PartnerProfile,
    #[serde(default)]
    pub female: PartnerProfile,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ProfileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIRTH_LAT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_to(&self, form: &mut BirthForm) {
        self.male.apply_to(&mut form.male);
        self.female.apply_to(&mut form.female);
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(page_url) = &self.server.page_url {
            validation::validate_url("server.page_url", page_url)?;
        }

        if let Some(timeout) = self.server.timeout_seconds {
            validation::validate_range("server.timeout_seconds", timeout, 1, 600)?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        Ok(())
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

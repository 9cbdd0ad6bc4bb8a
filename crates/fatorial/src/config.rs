use crate::error::{FatError, FatResult};
use crate::factorial::Overflow;
use log::debug;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_VALUE: i32 = 10;
pub const DEFAULT_BANNER: &str = "CALCULA O FATORIAL RECURSIVO";
pub const DEFAULT_LABEL: &str = "Fatorial: ";

/// Run settings. Every key is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FatConfig {
    pub value: i32,
    pub banner: String,
    pub label: String,
    /// Prompt for interactive reads; empty means none.
    pub prompt: String,
    pub overflow: Overflow,
}

impl Default for FatConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
            banner: DEFAULT_BANNER.to_string(),
            label: DEFAULT_LABEL.to_string(),
            prompt: String::new(),
            overflow: Overflow::Checked,
        }
    }
}

impl FatConfig {
    pub fn from_file(path: &Path) -> FatResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FatError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| FatError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reads `path` when given. Without one, nothing is read and the
    /// defaults apply.
    pub fn load(path: Option<&Path>) -> FatResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        if self.prompt.is_empty() {
            None
        } else {
            Some(&self.prompt)
        }
    }
}

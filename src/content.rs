//! Portfolio content file: showcased apps and the tools strip

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::icons::tool_icon;
use crate::types::{AppType, ToolType};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub apps: Vec<AppType>,
    #[serde(default)]
    pub tools: Vec<ToolType>,
}

impl Portfolio {
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fill empty tool logos from the icon table.
    /// Returns the names of tools that still have no logo.
    pub fn resolve_logos(&mut self) -> Vec<String> {
        let mut missing = Vec::new();

        for tool in self.tools.iter_mut().filter(|t| t.logo.is_empty()) {
            match tool_icon(tool.name.as_str()) {
                Some(path) => tool.logo = path.to_string(),
                None => {
                    tracing::debug!("No icon for tool {}", tool.name);
                    missing.push(tool.name.clone());
                }
            }
        }

        missing
    }
}

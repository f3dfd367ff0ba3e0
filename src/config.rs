//! Analysis Configuration Module
//! Column names and the profession label used to split the segments.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Header names of the required columns, matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub profession: String,
    pub id: String,
    pub age: String,
    pub time_spent_hour: String,
    pub engagement_score: String,
    pub platform: String,
    pub income: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            profession: "profession".to_string(),
            id: "id".to_string(),
            age: "age".to_string(),
            time_spent_hour: "time_spent_hour".to_string(),
            engagement_score: "engagement_score".to_string(),
            platform: "platform".to_string(),
            income: "income".to_string(),
        }
    }
}

/// Settings shared by every analyzer in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub columns: ColumnNames,
    /// Normalized profession value that puts a row in the student segment.
    pub student_label: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            student_label: "student".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Load a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(text)?;
        config.student_label = config.student_label.trim().to_lowercase();
        Ok(config)
    }
}

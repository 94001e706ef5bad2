use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::FINISH_STEP;

/// Lifecycle stage reported by the service for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Step {
    Wait,
    Upload,
    Convert,
    Finish,
    Failed,
    Other(String),
}

impl Step {
    pub fn is_finished(&self) -> bool {
        matches!(self, Step::Finish)
    }
}

impl From<String> for Step {
    fn from(step: String) -> Self {
        match step.as_str() {
            "wait" => Step::Wait,
            "upload" => Step::Upload,
            "convert" => Step::Convert,
            "failed" => Step::Failed,
            s if s == FINISH_STEP => Step::Finish,
            _ => Step::Other(step),
        }
    }
}

impl From<Step> for String {
    fn from(step: Step) -> Self {
        match step {
            Step::Wait => "wait".to_string(),
            Step::Upload => "upload".to_string(),
            Step::Convert => "convert".to_string(),
            Step::Finish => FINISH_STEP.to_string(),
            Step::Failed => "failed".to_string(),
            Step::Other(step) => step,
        }
    }
}

/// Where the converted artifact(s) can be fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

impl Output {
    /// File names relative to `url`, when the result is split into several files.
    pub fn multiple_files(&self) -> Option<&[String]> {
        match &self.files {
            Some(files) if !files.is_empty() => Some(files),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatus {
    #[serde(default)]
    pub id: Option<String>,
    pub step: Step,
    #[serde(default)]
    pub output: Option<Output>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "inputformat", default)]
    pub input_format: Option<String>,
    #[serde(rename = "outputformat", default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedConversion {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    pub minutes_left: f64,
}

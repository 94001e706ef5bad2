use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Url,
    Upload,
}

#[derive(Serialize)]
pub struct CreateConversionDto<'a> {
    pub apikey: &'a str,
    pub outputformat: &'a str,
    pub input: InputMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<&'a str>,
    pub filename: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a HashMap<String, Value>>,
}

#[derive(Serialize)]
pub struct ListConversionsDto<'a> {
    pub apikey: &'a str,
    pub count: u32,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct ApiKeyDto<'a> {
    pub apikey: &'a str,
}

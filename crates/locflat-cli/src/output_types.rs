use serde::Serialize;
use tabled::Tabled;

/// Output for convert command
#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub input: String,
    pub output: String,
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

use std::collections::BTreeMap;

use serde::Deserialize;

/// The settings record is replaced wholesale; there is exactly one.
#[derive(Debug, Deserialize)]
pub struct ReplaceSettingsRequest {
    pub currency: String,
    pub expiration_warning_days: u32,
    #[serde(default)]
    pub cost_baselines: BTreeMap<String, f64>,
    pub view_mode: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

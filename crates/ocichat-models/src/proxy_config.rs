use serde::Deserialize;

/// Proxy configuration document (the same YAML file the proxy itself is
/// started with). Only `model_list` is read here.
#[derive(Debug, Deserialize, Default)]
pub struct ProxyConfig {
    #[serde(default)]
    pub model_list: Vec<ModelListEntry>,
}

/// One entry under `model_list`. Provider parameters are carried opaquely;
/// this client only cares about the display name.
#[derive(Debug, Deserialize, Default)]
pub struct ModelListEntry {
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub litellm_params: Option<serde_json::Value>,
}

impl ProxyConfig {
    /// Extract model names in document order, skipping entries that do not
    /// carry a `model_name` field.
    pub fn model_names(&self) -> Vec<String> {
        self.model_list
            .iter()
            .filter_map(|entry| entry.model_name.clone())
            .collect()
    }
}

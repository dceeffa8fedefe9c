use async_trait::async_trait;

use ocichat_models::ModelList;

use crate::{CatalogError, CatalogSource, ModelCatalog};

/// Catalog source backed by the proxy's live `/v1/models` listing.
pub struct RemoteCatalog {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn resolve(&self) -> Result<ModelCatalog, CatalogError> {
        let response = self
            .client
            .get(self.models_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Unavailable(format!(
                "{} - {}",
                status, error_text
            )));
        }

        let listing: ModelList = response
            .json()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        // Server-provided order defines the display numbering.
        let models: ModelCatalog = listing.data.into_iter().map(|m| m.id).collect();
        if models.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(models)
    }
}

use std::path::PathBuf;

use async_trait::async_trait;

use ocichat_models::ProxyConfig;

use crate::{CatalogError, CatalogSource, ModelCatalog};

/// Catalog source backed by the proxy's YAML config file. Reads
/// `model_list[].model_name`, skipping entries without the field.
pub struct LocalCatalog {
    path: PathBuf,
}

impl LocalCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for LocalCatalog {
    async fn resolve(&self) -> Result<ModelCatalog, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let config: ProxyConfig = serde_yaml::from_str(&contents).map_err(|e| {
            CatalogError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let models = config.model_names();
        if models.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_resolve_skips_entries_without_model_name() {
        let file = write_config(
            r#"
model_list:
  - model_name: m1
    litellm_params:
      model: oci/xai.grok-3
  - litellm_params:
      model: oci/anonymous
  - model_name: m2
"#,
        );

        let catalog = LocalCatalog::new(file.path()).resolve().await.unwrap();
        assert_eq!(catalog, vec!["m1".to_string(), "m2".to_string()]);
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent_over_unchanged_file() {
        let file = write_config(
            r#"
model_list:
  - model_name: oci/xai.grok-3
  - model_name: oci/cohere.command-r-plus
"#,
        );

        let source = LocalCatalog::new(file.path());
        let first = source.resolve().await.unwrap();
        let second = source.resolve().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let source = LocalCatalog::new("/nonexistent/config.yaml");
        match source.resolve().await {
            Err(CatalogError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_document_is_unavailable() {
        let file = write_config("model_list: [unterminated");
        match LocalCatalog::new(file.path()).resolve().await {
            Err(CatalogError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_usable_entries_is_empty() {
        let file = write_config(
            r#"
model_list:
  - litellm_params:
      model: oci/anonymous
"#,
        );
        match LocalCatalog::new(file.path()).resolve().await {
            Err(CatalogError::Empty) => {}
            other => panic!("expected Empty, got {:?}", other),
        }
    }
}

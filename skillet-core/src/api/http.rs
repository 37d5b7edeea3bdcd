//! reqwest-backed implementation of [`RecipeApi`].

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{Recipe, RecipeDraft};
use crate::validate;

use super::{ApiConfig, RecipeApi, COLLECTION_PATH};

/// Production client for the collection service.
pub struct HttpRecipeApi {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpRecipeApi {
    /// Build a client from the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(ApiConfig::from_env())
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, COLLECTION_PATH)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, COLLECTION_PATH, id)
    }

    /// Uniform success check: 2xx passes, anything else is a failure
    /// regardless of body content.
    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::debug!(status = status.as_u16(), url = %response.url(), "request rejected");
            Err(ApiError::Status(status.as_u16()))
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ApiError::Shape(e.to_string())
            } else {
                ApiError::Transport(e)
            }
        })
    }

    /// Records are only trusted into view state after passing the same
    /// checks the forms apply; a mismatch counts as a fetch failure.
    fn check_shape(recipe: Recipe) -> Result<Recipe, ApiError> {
        if recipe.id.trim().is_empty() {
            return Err(ApiError::Shape("record has no id".to_string()));
        }
        validate::validate(&recipe.to_draft()).map_err(|e| ApiError::Shape(e.to_string()))?;
        Ok(recipe)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, "listing recipes");

        let response = Self::check_status(self.inner.get(&url).send().await?)?;
        let recipes: Vec<Recipe> = Self::decode(response).await?;
        recipes.into_iter().map(Self::check_shape).collect()
    }

    async fn get(&self, id: &str) -> Result<Recipe, ApiError> {
        let url = self.record_url(id);
        tracing::debug!(url = %url, "fetching recipe");

        let response = Self::check_status(self.inner.get(&url).send().await?)?;
        Self::check_shape(Self::decode(response).await?)
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, titulo = %draft.titulo, "creating recipe");

        let response = Self::check_status(self.inner.post(&url).json(draft).send().await?)?;
        Self::check_shape(Self::decode(response).await?)
    }

    async fn replace(&self, recipe: &Recipe) -> Result<Recipe, ApiError> {
        let url = self.record_url(&recipe.id);
        tracing::debug!(url = %url, "replacing recipe");

        let response = Self::check_status(self.inner.put(&url).json(recipe).send().await?)?;
        Self::check_shape(Self::decode(response).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.record_url(id);
        tracing::debug!(url = %url, "deleting recipe");

        Self::check_status(self.inner.delete(&url).send().await?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_without_double_slash() {
        let api = HttpRecipeApi::new(ApiConfig::default().with_base_url("http://example.com/"))
            .expect("client should build");
        assert_eq!(api.collection_url(), "http://example.com/api/receita");
        assert_eq!(api.record_url("7"), "http://example.com/api/receita/7");
    }

    #[test]
    fn test_shape_check_rejects_blank_fields() {
        let recipe = Recipe {
            id: "1".to_string(),
            titulo: String::new(),
            tipo: "lunch".to_string(),
            num_pessoas: 2,
            nivel_dificuldade: "easy".to_string(),
            lista_ingredientes: "rice".to_string(),
            preparacao: "boil".to_string(),
        };
        assert!(matches!(
            HttpRecipeApi::check_shape(recipe),
            Err(ApiError::Shape(_))
        ));
    }

    #[test]
    fn test_shape_check_rejects_missing_id() {
        let recipe = Recipe {
            id: "  ".to_string(),
            titulo: "Bolo".to_string(),
            tipo: "snack".to_string(),
            num_pessoas: 2,
            nivel_dificuldade: "easy".to_string(),
            lista_ingredientes: "flour".to_string(),
            preparacao: "bake".to_string(),
        };
        assert!(matches!(
            HttpRecipeApi::check_shape(recipe),
            Err(ApiError::Shape(_))
        ));
    }
}

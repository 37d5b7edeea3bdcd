//! Client for the remote collection service.
//!
//! The service is an opaque key-value store reachable over HTTP with
//! JSON payloads. [`RecipeApi`] is the seam the views depend on;
//! [`HttpRecipeApi`] is the production implementation and [`FakeApi`]
//! the in-memory stand-in for tests.

mod config;
mod fake;
mod http;

pub use config::{ApiConfig, DEFAULT_SERVER};
pub use fake::{FakeApi, RecordedCall};
pub use http::HttpRecipeApi;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{Recipe, RecipeDraft};

/// Base path of the recipe collection on the remote service.
pub const COLLECTION_PATH: &str = "/api/receita";

/// Trait for the collection service, enabling fakes in tests.
///
/// Update semantics are full replacement; there is no partial update.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch the entire collection, in server order.
    async fn list(&self) -> Result<Vec<Recipe>, ApiError>;

    /// Fetch a single record by id.
    async fn get(&self, id: &str) -> Result<Recipe, ApiError>;

    /// Create a record from a draft; the store assigns the id.
    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError>;

    /// Replace the stored record with the same id, in full.
    async fn replace(&self, recipe: &Recipe) -> Result<Recipe, ApiError>;

    /// Destroy the record with this id.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

//! In-memory collection service for testing.
//!
//! Behaves like the remote store: keeps records in insertion order,
//! assigns ids on create, replaces in place, deletes by id. Failures
//! can be scripted one call at a time, and every served call is
//! journaled so tests can assert on request traffic.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{Recipe, RecipeDraft};

use super::RecipeApi;

/// A call the fake has served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    List,
    Get(String),
    Create(RecipeDraft),
    Replace(Recipe),
    Delete(String),
}

#[derive(Default)]
struct FakeState {
    records: Vec<Recipe>,
    next_id: u32,
    fail_next: Option<u16>,
    calls: Vec<RecordedCall>,
}

/// In-memory stand-in for the remote collection service.
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with records, served back in this order.
    pub fn with_records(records: Vec<Recipe>) -> Self {
        let next_id = records.len() as u32;
        Self {
            state: Mutex::new(FakeState {
                records,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    /// Make the next call fail with the given HTTP status.
    pub fn fail_next(&self, status: u16) {
        self.state.lock().unwrap().fail_next = Some(status);
    }

    /// Every call served so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Snapshot of the stored records.
    pub fn records(&self) -> Vec<Recipe> {
        self.state.lock().unwrap().records.clone()
    }

    /// Journal the call, then fail it if a failure was scripted.
    fn begin(&self, call: RecordedCall) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(status) = state.fail_next.take() {
            return Err(ApiError::Status(status));
        }
        Ok(state)
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        let state = self.begin(RecordedCall::List)?;
        Ok(state.records.clone())
    }

    async fn get(&self, id: &str) -> Result<Recipe, ApiError> {
        let state = self.begin(RecordedCall::Get(id.to_string()))?;
        state
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let mut state = self.begin(RecordedCall::Create(draft.clone()))?;
        state.next_id += 1;
        let recipe = Recipe::from_draft(state.next_id.to_string(), draft.clone());
        state.records.push(recipe.clone());
        Ok(recipe)
    }

    async fn replace(&self, recipe: &Recipe) -> Result<Recipe, ApiError> {
        let mut state = self.begin(RecordedCall::Replace(recipe.clone()))?;
        let stored = state
            .records
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or(ApiError::Status(404))?;
        *stored = recipe.clone();
        Ok(recipe.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.begin(RecordedCall::Delete(id.to_string()))?;
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        if state.records.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(titulo: &str) -> RecipeDraft {
        RecipeDraft {
            titulo: titulo.to_string(),
            tipo: "lunch".to_string(),
            num_pessoas: 2,
            nivel_dificuldade: "easy".to_string(),
            lista_ingredientes: "rice".to_string(),
            preparacao: "boil".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let api = FakeApi::new();
        let first = api.create(&draft("a")).await.unwrap();
        let second = api.create(&draft("b")).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[tokio::test]
    async fn test_scripted_failure_hits_one_call() {
        let api = FakeApi::new();
        api.fail_next(500);
        assert!(matches!(api.list().await, Err(ApiError::Status(500))));
        assert!(api.list().await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_record_is_404() {
        let api = FakeApi::new();
        assert!(matches!(api.get("9").await, Err(ApiError::Status(404))));
        assert!(matches!(api.delete("9").await, Err(ApiError::Status(404))));
    }
}

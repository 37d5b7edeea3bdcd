//! Edit view.

use crate::api::RecipeApi;
use crate::error::{ApiError, SubmitError};
use crate::route::Route;
use crate::types::{Recipe, RecipeDraft};
use crate::validate::{self, ValidationErrors};

use super::form::{self, SubmitState};

/// Lifecycle of the edit view. The form only renders in `Ready`;
/// a failed load is terminal for this view instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// The record read is pending; the form is not rendered.
    Loading,
    /// The draft holds the fetched record.
    Ready,
    /// The read failed; the message is kept for display. No retry.
    Failed(String),
}

/// State of the edit form, addressed by the record id carried in the
/// navigation path.
pub struct EditView {
    id: String,
    state: EditState,
    draft: RecipeDraft,
    in_flight: bool,
}

impl EditView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: EditState::Loading,
            draft: RecipeDraft::default(),
            in_flight: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == EditState::Ready
    }

    /// Fetch the record under edit and populate the draft with it, the
    /// id carried through unchanged. On failure the form is never
    /// populated and the view ends in [`EditState::Failed`].
    pub async fn initialize(&mut self, api: &dyn RecipeApi) -> Result<(), ApiError> {
        match api.get(&self.id).await {
            Ok(recipe) => {
                self.draft = recipe.to_draft();
                self.state = EditState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, id = %self.id, "failed to load recipe");
                self.state = EditState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RecipeDraft {
        &mut self.draft
    }

    pub fn validation(&self) -> Result<(), ValidationErrors> {
        validate::validate(&self.draft)
    }

    pub fn submit_state(&self) -> SubmitState {
        if !self.is_ready() {
            return SubmitState::Disabled;
        }
        form::submit_state(self.validation().is_ok(), self.in_flight)
    }

    /// Full replacement of the stored record with the current draft.
    /// Navigates to the collection only after a 2xx; on failure the
    /// draft stays editable and submit is re-enabled.
    pub async fn submit(&mut self, api: &dyn RecipeApi) -> Result<Route, SubmitError> {
        if !self.is_ready() {
            return Err(SubmitError::NotReady);
        }
        if let Err(errors) = self.validation() {
            return Err(SubmitError::Invalid(errors));
        }

        let recipe = Recipe::from_draft(self.id.clone(), self.draft.clone());

        self.in_flight = true;
        let result = api.replace(&recipe).await;
        self.in_flight = false;

        match result {
            Ok(updated) => {
                tracing::debug!(id = %updated.id, "recipe updated");
                Ok(Route::Collection)
            }
            Err(e) => {
                tracing::error!(error = %e, id = %self.id, "failed to update recipe");
                Err(e.into())
            }
        }
    }
}

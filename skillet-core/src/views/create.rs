//! Creation view.

use crate::api::RecipeApi;
use crate::error::SubmitError;
use crate::route::Route;
use crate::types::RecipeDraft;
use crate::validate::{self, ValidationErrors};

use super::form::{self, SubmitState};

/// Draft-backed creation form. The draft starts from the same initial
/// values it resets to after a successful create.
#[derive(Default)]
pub struct CreateView {
    draft: RecipeDraft,
    in_flight: bool,
}

impl CreateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RecipeDraft {
        &mut self.draft
    }

    /// Run the validator over the current draft.
    pub fn validation(&self) -> Result<(), ValidationErrors> {
        validate::validate(&self.draft)
    }

    pub fn submit_state(&self) -> SubmitState {
        form::submit_state(self.validation().is_ok(), self.in_flight)
    }

    /// Send the draft to the store. Refuses without touching the
    /// network while the draft is invalid. Navigation to the collection
    /// happens only after a 2xx; on failure the draft stays editable
    /// and submit is re-enabled.
    pub async fn submit(&mut self, api: &dyn RecipeApi) -> Result<Route, SubmitError> {
        if let Err(errors) = self.validation() {
            return Err(SubmitError::Invalid(errors));
        }

        self.in_flight = true;
        let result = api.create(&self.draft).await;
        self.in_flight = false;

        match result {
            Ok(created) => {
                tracing::debug!(id = %created.id, "recipe created");
                self.draft = RecipeDraft::default();
                Ok(Route::Collection)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create recipe");
                Err(e.into())
            }
        }
    }
}

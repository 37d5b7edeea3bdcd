//! Collection view: the loaded list, the active record, and the
//! two-phase delete flow.

use crate::api::RecipeApi;
use crate::error::ApiError;
use crate::route::Route;
use crate::types::Recipe;

/// Delete confirmation modeled as one flow rather than independent
/// booleans, so the local removal cannot be reordered ahead of the
/// server acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Closed,
    /// The prompt is open, naming the active record's title.
    Confirming,
    /// The delete request is in flight.
    Committing,
}

/// State of the collection view.
#[derive(Default)]
pub struct CollectionView {
    recipes: Vec<Recipe>,
    active: Option<String>,
    delete_flow: DeleteFlow,
}

impl CollectionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the whole collection, replacing the local list with the
    /// server's order. On failure the list is left empty; load errors
    /// are logged but not surfaced.
    pub async fn load(&mut self, api: &dyn RecipeApi) {
        match api.list().await {
            Ok(recipes) => {
                self.recipes = recipes;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load recipes");
                self.recipes.clear();
            }
        }
        // A selection pointing at a record that no longer exists is dropped.
        if let Some(id) = &self.active {
            if !self.recipes.iter().any(|r| &r.id == id) {
                self.active = None;
            }
        }
    }

    /// Last-loaded records, in server order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Set the active record. No-op when the id is not in the list.
    pub fn select(&mut self, id: &str) {
        if self.recipes.iter().any(|r| r.id == id) {
            self.active = Some(id.to_string());
        }
    }

    /// The record currently shown in the detail display.
    pub fn active(&self) -> Option<&Recipe> {
        self.active
            .as_deref()
            .and_then(|id| self.recipes.iter().find(|r| r.id == id))
    }

    /// Detail display header: the active record's title, uppercased.
    pub fn detail_header(&self) -> Option<String> {
        self.active().map(|r| r.titulo.to_uppercase())
    }

    pub fn delete_flow(&self) -> DeleteFlow {
        self.delete_flow
    }

    /// Open the delete confirmation prompt for the active record.
    /// Returns the title the prompt should name, or `None` when there
    /// is no active record or a delete is already underway.
    pub fn request_delete(&mut self) -> Option<&str> {
        if self.delete_flow != DeleteFlow::Closed {
            return None;
        }
        if self.active().is_none() {
            return None;
        }
        self.delete_flow = DeleteFlow::Confirming;
        self.active().map(|r| r.titulo.as_str())
    }

    /// Dismiss the confirmation prompt without deleting anything.
    pub fn cancel_delete(&mut self) {
        if self.delete_flow == DeleteFlow::Confirming {
            self.delete_flow = DeleteFlow::Closed;
        }
    }

    /// Commit the pending delete. The local list and selection change
    /// only after the server acknowledges with a 2xx; on failure both
    /// are left untouched. The prompt closes on every outcome.
    pub async fn confirm_delete(&mut self, api: &dyn RecipeApi) -> Result<(), ApiError> {
        if self.delete_flow != DeleteFlow::Confirming {
            return Ok(());
        }
        let Some(id) = self.active.clone() else {
            self.delete_flow = DeleteFlow::Closed;
            return Ok(());
        };

        self.delete_flow = DeleteFlow::Committing;
        let result = api.delete(&id).await;
        self.delete_flow = DeleteFlow::Closed;

        match result {
            Ok(()) => {
                self.recipes.retain(|r| r.id != id);
                self.active = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, id = %id, "failed to delete recipe");
                Err(e)
            }
        }
    }

    /// Route to the edit view for the active record. No local mutation.
    pub fn edit_route(&self) -> Option<Route> {
        self.active.clone().map(Route::Edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, titulo: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            titulo: titulo.to_string(),
            tipo: "lunch".to_string(),
            num_pessoas: 2,
            nivel_dificuldade: "easy".to_string(),
            lista_ingredientes: "rice".to_string(),
            preparacao: "boil".to_string(),
        }
    }

    fn loaded_view() -> CollectionView {
        let mut view = CollectionView::new();
        view.recipes = vec![recipe("1", "Bolo"), recipe("2", "Sopa")];
        view
    }

    #[test]
    fn test_select_unknown_id_is_a_no_op() {
        let mut view = loaded_view();
        view.select("1");
        view.select("missing");
        assert_eq!(view.active().map(|r| r.id.as_str()), Some("1"));
    }

    #[test]
    fn test_request_delete_needs_an_active_record() {
        let mut view = loaded_view();
        assert_eq!(view.request_delete(), None);
        assert_eq!(view.delete_flow(), DeleteFlow::Closed);

        view.select("2");
        assert_eq!(view.request_delete(), Some("Sopa"));
        assert_eq!(view.delete_flow(), DeleteFlow::Confirming);
    }

    #[test]
    fn test_cancel_closes_the_prompt_and_keeps_everything() {
        let mut view = loaded_view();
        view.select("1");
        view.request_delete();
        view.cancel_delete();
        assert_eq!(view.delete_flow(), DeleteFlow::Closed);
        assert_eq!(view.recipes().len(), 2);
        assert!(view.active().is_some());
    }

    #[test]
    fn test_edit_route_carries_the_active_id() {
        let mut view = loaded_view();
        assert_eq!(view.edit_route(), None);
        view.select("2");
        assert_eq!(view.edit_route(), Some(Route::Edit("2".to_string())));
    }
}

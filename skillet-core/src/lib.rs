//! Client-side state and data flow for a remote recipe collection.
//!
//! The remote REST store is the sole source of truth. Each view holds a
//! transient copy of the records it needs, fetched on display and
//! discarded on navigation; cross-view handoff happens only through the
//! record id carried in a [`Route`] plus a full re-fetch.

pub mod api;
pub mod error;
pub mod route;
pub mod types;
pub mod validate;
pub mod views;

pub use api::{ApiConfig, FakeApi, HttpRecipeApi, RecipeApi, RecordedCall, DEFAULT_SERVER};
pub use error::{ApiError, SubmitError};
pub use route::Route;
pub use types::{Difficulty, Recipe, RecipeDraft, MEAL_TYPES};
pub use validate::{validate, ValidationErrors};
pub use views::{CollectionView, CreateView, DeleteFlow, EditState, EditView, SubmitState};

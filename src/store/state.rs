//! Root application state.

use serde::Serialize;

use super::catalog::CatalogState;
use super::listing::ListingState;
use super::mvi::UiState;
use super::session::SessionState;
use crate::model::{LoginFields, ReviewFields};

/// Single source of truth for the client.
///
/// `AppState::default()` is the initial state: nothing loaded, nothing
/// selected, empty drafts, logged out. Transitions only happen through
/// [`reduce`](super::reduce); the drafts are never cleared by it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub catalog: CatalogState,
    pub listing: ListingState,
    pub review_fields: ReviewFields,
    pub login_fields: LoginFields,
    pub session: SessionState,
}

impl UiState for AppState {}

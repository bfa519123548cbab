//! Top-level reducer.
//!
//! Routes every [`Action`] to the sub-reducer that owns the affected slice
//! and rebuilds the root state around the result.

use super::action::Action;
use super::catalog::{CatalogIntent, CatalogReducer};
use super::forms::{LoginFieldsReducer, ReviewFieldsReducer};
use super::listing::{ListingIntent, ListingReducer};
use super::mvi::Reducer;
use super::session::{SessionIntent, SessionReducer};
use super::state::AppState;

impl super::mvi::Intent for Action {}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = Action;

    fn reduce(state: Self::State, action: Self::Intent) -> Self::State {
        match action {
            Action::SetRegions { regions } => with_catalog(state, CatalogIntent::SetRegions(regions)),
            Action::SetCategories { categories } => {
                with_catalog(state, CatalogIntent::SetCategories(categories))
            }
            Action::SelectRegion { region_id } => {
                with_catalog(state, CatalogIntent::SelectRegion(region_id))
            }
            Action::SelectCategory { category_id } => {
                with_catalog(state, CatalogIntent::SelectCategory(category_id))
            }
            Action::SetRestaurants { restaurants } => {
                with_listing(state, ListingIntent::SetRestaurants(restaurants))
            }
            Action::SetRestaurant { restaurant } => {
                with_listing(state, ListingIntent::SetRestaurant(restaurant))
            }
            Action::ChangeReviewFields(change) => AppState {
                review_fields: ReviewFieldsReducer::reduce(state.review_fields, change),
                ..state
            },
            Action::ChangeLoginFields(change) => AppState {
                login_fields: LoginFieldsReducer::reduce(state.login_fields, change),
                ..state
            },
            Action::SetAccessToken { access_token } => {
                with_session(state, SessionIntent::SetAccessToken(access_token))
            }
            Action::DeleteAccessToken => with_session(state, SessionIntent::DeleteAccessToken),
            Action::Unknown => state,
        }
    }
}

/// Pure state transition: `(State, Action) -> State`.
pub fn reduce(state: AppState, action: Action) -> AppState {
    AppReducer::reduce(state, action)
}

fn with_catalog(state: AppState, intent: CatalogIntent) -> AppState {
    AppState {
        catalog: CatalogReducer::reduce(state.catalog, intent),
        ..state
    }
}

fn with_listing(state: AppState, intent: ListingIntent) -> AppState {
    AppState {
        listing: ListingReducer::reduce(state.listing, intent),
        ..state
    }
}

fn with_session(state: AppState, intent: SessionIntent) -> AppState {
    AppState {
        session: SessionReducer::reduce(state.session, intent),
        ..state
    }
}

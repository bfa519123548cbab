//! Asynchronous action creators.
//!
//! Each effect reads a state snapshot, validates what it needs from it,
//! calls the API and/or storage, and dispatches plain actions in order.
//! Missing input is not an error: the effect does nothing at all, no
//! network call, no storage access, no dispatch. Collaborator failures
//! propagate to the caller.

use std::sync::Arc;

use thiserror::Error;

use super::action::{
    delete_access_token, set_access_token, set_categories, set_regions, set_restaurant,
    set_restaurants,
};
use super::dispatch::Dispatch;
use crate::api::{ApiError, RestaurantApi};
use crate::storage::{Storage, StorageError, ACCESS_TOKEN_KEY};

/// Errors surfaced by effects. Validation gaps never end up here.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Collaborators shared by all effects.
#[derive(Clone)]
pub struct Effects {
    api: Arc<dyn RestaurantApi>,
    storage: Arc<dyn Storage>,
}

impl Effects {
    pub fn new(api: Arc<dyn RestaurantApi>, storage: Arc<dyn Storage>) -> Self {
        Self { api, storage }
    }

    /// Fetch regions and categories together, then publish them in that order.
    pub async fn load_initial_data<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        let (regions, categories) =
            tokio::try_join!(self.api.fetch_regions(), self.api.fetch_categories())?;

        tracing::debug!(
            regions = regions.len(),
            categories = categories.len(),
            "initial data loaded"
        );
        store.dispatch(set_regions(regions));
        store.dispatch(set_categories(categories));
        Ok(())
    }

    pub async fn load_restaurants<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        let state = store.state();
        let Some((region, category)) = state.catalog.filter() else {
            tracing::debug!("region or category not selected, skipping restaurant fetch");
            return Ok(());
        };

        let restaurants = self
            .api
            .fetch_restaurants(&region.name, category.id)
            .await?;

        tracing::debug!(
            region = %region.name,
            category = category.id,
            count = restaurants.len(),
            "restaurants loaded"
        );
        store.dispatch(set_restaurants(restaurants));
        Ok(())
    }

    /// Clears the current detail before fetching, so a previous restaurant
    /// is never shown while the next one loads.
    pub async fn load_restaurant<D: Dispatch>(
        &self,
        store: &D,
        restaurant_id: u64,
    ) -> Result<(), EffectError> {
        store.dispatch(set_restaurant(None));

        let restaurant = self.api.fetch_restaurant(restaurant_id).await?;
        tracing::debug!(restaurant_id, reviews = restaurant.reviews.len(), "restaurant loaded");
        store.dispatch(set_restaurant(Some(restaurant)));
        Ok(())
    }

    /// Log in with the drafted credentials and persist the session token.
    pub async fn post_login_fields<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        let fields = store.state().login_fields;
        if !fields.is_complete() {
            tracing::debug!("login fields incomplete, skipping login");
            return Ok(());
        }

        let response = self
            .api
            .post_login(&fields.email, fields.password.expose())
            .await?;
        self.storage
            .set_item(ACCESS_TOKEN_KEY, &response.access_token)?;

        tracing::info!(email = %fields.email, "logged in");
        store.dispatch(set_access_token(response.access_token));
        Ok(())
    }

    /// Same as [`post_login_fields`](Self::post_login_fields).
    pub async fn request_login<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        self.post_login_fields(store).await
    }

    /// Submit the drafted review for the restaurant on screen, then reload it.
    ///
    /// Needs a complete draft, a session token and a loaded restaurant.
    pub async fn post_review_fields<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        let state = store.state();
        let fields = state.review_fields;
        if !fields.is_complete() {
            tracing::debug!("review fields incomplete, skipping review");
            return Ok(());
        }

        let Some(access_token) = state.session.access_token else {
            tracing::debug!("not logged in, skipping review");
            return Ok(());
        };

        let Some(restaurant) = state.listing.restaurant else {
            tracing::debug!("no restaurant loaded, skipping review");
            return Ok(());
        };

        let response = self
            .api
            .post_review(
                &fields.score,
                &fields.description,
                access_token.expose(),
                restaurant.id,
            )
            .await?;

        if !response.is_success() {
            tracing::warn!(
                restaurant_id = restaurant.id,
                status = response.status,
                "review was not accepted"
            );
        }

        self.load_restaurant(store, restaurant.id).await
    }

    pub async fn logout<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        self.storage.remove_item(ACCESS_TOKEN_KEY)?;
        tracing::info!("logged out");
        store.dispatch(delete_access_token());
        Ok(())
    }

    /// Pick up a token persisted by an earlier run.
    pub async fn restore_session<D: Dispatch>(&self, store: &D) -> Result<(), EffectError> {
        match self.storage.get_item(ACCESS_TOKEN_KEY)? {
            Some(token) if !token.is_empty() => {
                tracing::debug!("session restored from storage");
                store.dispatch(set_access_token(token));
            }
            _ => tracing::debug!("no stored session"),
        }
        Ok(())
    }
}

impl std::fmt::Debug for Effects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effects").finish_non_exhaustive()
    }
}

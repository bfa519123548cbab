//! Remote EatGo API.
//!
//! [`RestaurantApi`] is the seam the effects layer depends on;
//! [`ApiClient`] is the HTTP implementation.

mod client;
mod error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{Category, Region, RestaurantDetail, RestaurantSummary};

pub use client::ApiClient;
pub use error::ApiError;

/// Body returned by the session endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Outcome of a review submission. Only the status is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewResponse {
    pub status: u16,
}

impl ReviewResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The calls the application makes against the EatGo services.
///
/// Implementations report transport failures as errors and never retry.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Restaurants in the region called `region_name` with the given category.
    async fn fetch_restaurants(
        &self,
        region_name: &str,
        category_id: u64,
    ) -> Result<Vec<RestaurantSummary>, ApiError>;

    async fn fetch_restaurant(&self, restaurant_id: u64) -> Result<RestaurantDetail, ApiError>;

    async fn post_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Submits a review. Any HTTP status the server answers with is returned
    /// as-is; only transport failures are errors.
    async fn post_review(
        &self,
        score: &str,
        description: &str,
        access_token: &str,
        restaurant_id: u64,
    ) -> Result<ReviewResponse, ApiError>;
}

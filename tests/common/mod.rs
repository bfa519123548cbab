//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use eatgo::api::{ApiError, LoginResponse, RestaurantApi, ReviewResponse};
use eatgo::model::{Category, MenuItem, Region, RestaurantDetail, RestaurantSummary, Review};
use eatgo::storage::{MemoryStorage, Storage, StorageError};
use eatgo::store::{Action, AppState, Dispatch};
use parking_lot::Mutex;

// -- Fixtures -----------------------------------------------------------------

pub fn regions() -> Vec<Region> {
    vec![
        Region {
            id: 1,
            name: "서울".to_string(),
        },
        Region {
            id: 2,
            name: "대전".to_string(),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "한식".to_string(),
        },
        Category {
            id: 2,
            name: "중식".to_string(),
        },
    ]
}

pub fn restaurants() -> Vec<RestaurantSummary> {
    vec![RestaurantSummary {
        id: 1,
        name: "마녀주방".to_string(),
        category_id: 1,
        address: "서울시 강남구".to_string(),
    }]
}

pub fn restaurant() -> RestaurantDetail {
    RestaurantDetail {
        id: 1,
        name: "마녀주방".to_string(),
        category_id: 1,
        address: "서울시 강남구".to_string(),
        menu_items: vec![MenuItem {
            id: 1,
            name: "비빔밥".to_string(),
        }],
        reviews: vec![Review {
            id: 1,
            name: "테스터".to_string(),
            score: 5,
            description: "맛있어요".to_string(),
        }],
    }
}

// -- Mock store ---------------------------------------------------------------

/// Store that never reduces: `state()` always returns the state it was built
/// with, and every dispatched action is recorded.
pub struct MockStore {
    state: AppState,
    actions: Mutex<Vec<Action>>,
}

impl MockStore {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            actions: Mutex::new(Vec::new()),
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().clone()
    }
}

impl Dispatch for MockStore {
    fn dispatch(&self, action: Action) {
        self.actions.lock().push(action);
    }

    fn state(&self) -> AppState {
        self.state.clone()
    }
}

// -- Mock API -----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchRegions,
    FetchCategories,
    FetchRestaurants {
        region_name: String,
        category_id: u64,
    },
    FetchRestaurant(u64),
    PostLogin {
        email: String,
        password: String,
    },
    PostReview {
        score: String,
        description: String,
        access_token: String,
        restaurant_id: u64,
    },
}

/// Canned API: answers with the configured values and records each call.
pub struct MockApi {
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
    pub restaurants: Vec<RestaurantSummary>,
    pub restaurant: RestaurantDetail,
    pub access_token: String,
    pub review_status: u16,
    /// When set, every call fails with this HTTP status.
    pub fail_status: Option<u16>,
    pub calls: Mutex<Vec<ApiCall>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            categories: Vec::new(),
            restaurants: Vec::new(),
            restaurant: restaurant(),
            access_token: "12345678".to_string(),
            review_status: 201,
            fail_status: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: ApiCall, path: &str) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        match self.fail_status {
            Some(status) => Err(ApiError::Status {
                url: format!("http://mock{}", path),
                status,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RestaurantApi for MockApi {
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.record(ApiCall::FetchRegions, "/regions")?;
        Ok(self.regions.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record(ApiCall::FetchCategories, "/categories")?;
        Ok(self.categories.clone())
    }

    async fn fetch_restaurants(
        &self,
        region_name: &str,
        category_id: u64,
    ) -> Result<Vec<RestaurantSummary>, ApiError> {
        self.record(
            ApiCall::FetchRestaurants {
                region_name: region_name.to_string(),
                category_id,
            },
            "/restaurants",
        )?;
        Ok(self.restaurants.clone())
    }

    async fn fetch_restaurant(&self, restaurant_id: u64) -> Result<RestaurantDetail, ApiError> {
        self.record(
            ApiCall::FetchRestaurant(restaurant_id),
            &format!("/restaurants/{}", restaurant_id),
        )?;
        Ok(RestaurantDetail {
            id: restaurant_id,
            ..self.restaurant.clone()
        })
    }

    async fn post_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.record(
            ApiCall::PostLogin {
                email: email.to_string(),
                password: password.to_string(),
            },
            "/session",
        )?;
        Ok(LoginResponse {
            access_token: self.access_token.clone(),
        })
    }

    async fn post_review(
        &self,
        score: &str,
        description: &str,
        access_token: &str,
        restaurant_id: u64,
    ) -> Result<ReviewResponse, ApiError> {
        self.record(
            ApiCall::PostReview {
                score: score.to_string(),
                description: description.to_string(),
                access_token: access_token.to_string(),
                restaurant_id,
            },
            &format!("/restaurants/{}/reviews", restaurant_id),
        )?;
        Ok(ReviewResponse {
            status: self.review_status,
        })
    }
}

// -- Recording storage --------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum StorageCall {
    Get(String),
    Set(String, String),
    Remove(String),
}

/// In-memory storage that records every call.
#[derive(Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    calls: Mutex<Vec<StorageCall>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.calls.lock().clone()
    }
}

impl Storage for RecordingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.calls.lock().push(StorageCall::Get(key.to_string()));
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.calls
            .lock()
            .push(StorageCall::Set(key.to_string(), value.to_string()));
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.calls.lock().push(StorageCall::Remove(key.to_string()));
        self.inner.remove_item(key)
    }
}

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::error::ApiError;
use crate::api::{LoginResponse, RestaurantApi, ReviewResponse};
use crate::config::ApiConfig;
use crate::model::{Category, Region, RestaurantDetail, RestaurantSummary};

/// HTTP client for the customer and login APIs.
///
/// Holds a single pooled `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    login_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ApiError::Request {
                url: config.base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_url: config.login_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        parse_url(&format!("{}{}", self.base_url, path))
    }

    fn restaurants_url(&self, region_name: &str, category_id: u64) -> Result<Url, ApiError> {
        let raw = format!("{}/restaurants", self.base_url);
        Url::parse_with_params(
            &raw,
            &[
                ("region", region_name.to_string()),
                ("category", category_id.to_string()),
            ],
        )
        .map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;
        decode(url, response).await
    }
}

#[async_trait]
impl RestaurantApi for ApiClient {
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.get_json(self.endpoint("/regions")?).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(self.endpoint("/categories")?).await
    }

    async fn fetch_restaurants(
        &self,
        region_name: &str,
        category_id: u64,
    ) -> Result<Vec<RestaurantSummary>, ApiError> {
        self.get_json(self.restaurants_url(region_name, category_id)?)
            .await
    }

    async fn fetch_restaurant(&self, restaurant_id: u64) -> Result<RestaurantDetail, ApiError> {
        self.get_json(self.endpoint(&format!("/restaurants/{}", restaurant_id))?)
            .await
    }

    async fn post_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = parse_url(&self.login_url)?;
        tracing::debug!(%url, "POST login");

        let response = self
            .client
            .post(url.clone())
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;
        decode(url, response).await
    }

    async fn post_review(
        &self,
        score: &str,
        description: &str,
        access_token: &str,
        restaurant_id: u64,
    ) -> Result<ReviewResponse, ApiError> {
        let url = self.endpoint(&format!("/restaurants/{}/reviews", restaurant_id))?;
        tracing::debug!(%url, "POST review");

        let response = self
            .client
            .post(url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .json(&json!({ "score": score, "description": description }))
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;

        Ok(ReviewResponse {
            status: response.status().as_u16(),
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ApiError> {
    Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn request_error(url: &Url, source: reqwest::Error) -> ApiError {
    ApiError::Request {
        url: url.to_string(),
        source,
    }
}

async fn decode<T: DeserializeOwned>(url: Url, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| request_error(&url, e))?;

    serde_json::from_str(&body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}

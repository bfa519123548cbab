//! Domain entities exchanged with the EatGo API.
//!
//! Wire names are camelCase JSON. Unknown fields are ignored so that the
//! server can grow its payloads without breaking older clients.

use serde::{Deserialize, Serialize};

use crate::secret::SecureString;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// A restaurant as it appears in a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: u64,
    pub name: String,
    pub category_id: u64,
    #[serde(default)]
    pub address: String,
}

/// A restaurant with everything the detail view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub id: u64,
    pub name: String,
    pub category_id: u64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub name: String,
    pub score: u32,
    pub description: String,
}

/// Draft of a review being written. Values stay strings until submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewFields {
    pub score: String,
    pub description: String,
}

impl ReviewFields {
    pub fn is_complete(&self) -> bool {
        !self.score.is_empty() && !self.description.is_empty()
    }
}

/// Draft of the login form. The password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginFields {
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: SecureString,
}

impl LoginFields {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

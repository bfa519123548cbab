//! Actions and their creators.
//!
//! An [`Action`] is a plain value describing a state change. On the wire it
//! is the object `{ "type": <name>, "payload": <data> }`, with the payload
//! omitted for actions that carry none.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{Category, Region, RestaurantDetail, RestaurantSummary};

/// Change of a single named field in a draft form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

/// Wire names of every action type this build understands.
pub const ACTION_TYPES: [&str; 10] = [
    "setRegions",
    "setCategories",
    "setRestaurants",
    "setRestaurant",
    "changeReviewFields",
    "selectRegion",
    "selectCategory",
    "changeLoginFields",
    "setAccessToken",
    "deleteAccessToken",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    remote = "Self",
    tag = "type",
    content = "payload",
    rename_all = "camelCase"
)]
pub enum Action {
    SetRegions {
        regions: Vec<Region>,
    },
    SetCategories {
        categories: Vec<Category>,
    },
    SetRestaurants {
        restaurants: Vec<RestaurantSummary>,
    },
    /// `None` clears the detail view while a new restaurant loads.
    SetRestaurant {
        restaurant: Option<RestaurantDetail>,
    },
    ChangeReviewFields(FieldChange),
    #[serde(rename_all = "camelCase")]
    SelectRegion {
        region_id: u64,
    },
    #[serde(rename_all = "camelCase")]
    SelectCategory {
        category_id: u64,
    },
    ChangeLoginFields(FieldChange),
    #[serde(rename_all = "camelCase")]
    SetAccessToken {
        access_token: String,
    },
    DeleteAccessToken,
    /// Any action type this build does not know, with or without a
    /// payload. Reduces to the same state.
    #[serde(other)]
    Unknown,
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Action::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) {
            if !ACTION_TYPES.contains(&kind) {
                tracing::debug!(action = kind, "unrecognized action type");
                return Ok(Action::Unknown);
            }
        }
        Action::deserialize(value).map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl Action {
    /// Wire name of the action type.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetRegions { .. } => "setRegions",
            Action::SetCategories { .. } => "setCategories",
            Action::SetRestaurants { .. } => "setRestaurants",
            Action::SetRestaurant { .. } => "setRestaurant",
            Action::ChangeReviewFields(_) => "changeReviewFields",
            Action::SelectRegion { .. } => "selectRegion",
            Action::SelectCategory { .. } => "selectCategory",
            Action::ChangeLoginFields(_) => "changeLoginFields",
            Action::SetAccessToken { .. } => "setAccessToken",
            Action::DeleteAccessToken => "deleteAccessToken",
            Action::Unknown => "unknown",
        }
    }
}

pub fn set_regions(regions: Vec<Region>) -> Action {
    Action::SetRegions { regions }
}

pub fn set_categories(categories: Vec<Category>) -> Action {
    Action::SetCategories { categories }
}

pub fn set_restaurants(restaurants: Vec<RestaurantSummary>) -> Action {
    Action::SetRestaurants { restaurants }
}

pub fn set_restaurant(restaurant: Option<RestaurantDetail>) -> Action {
    Action::SetRestaurant { restaurant }
}

pub fn change_review_fields(name: impl Into<String>, value: impl Into<String>) -> Action {
    Action::ChangeReviewFields(FieldChange {
        name: name.into(),
        value: value.into(),
    })
}

pub fn select_region(region_id: u64) -> Action {
    Action::SelectRegion { region_id }
}

pub fn select_category(category_id: u64) -> Action {
    Action::SelectCategory { category_id }
}

pub fn change_login_fields(name: impl Into<String>, value: impl Into<String>) -> Action {
    Action::ChangeLoginFields(FieldChange {
        name: name.into(),
        value: value.into(),
    })
}

pub fn set_access_token(access_token: impl Into<String>) -> Action {
    Action::SetAccessToken {
        access_token: access_token.into(),
    }
}

pub fn delete_access_token() -> Action {
    Action::DeleteAccessToken
}

//! Filtered restaurant list and the restaurant being viewed.

use serde::Serialize;

use super::mvi::{Intent, Reducer, UiState};
use crate::model::{RestaurantDetail, RestaurantSummary};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListingState {
    pub restaurants: Vec<RestaurantSummary>,
    pub restaurant: Option<RestaurantDetail>,
}

impl UiState for ListingState {}

#[derive(Debug, Clone)]
pub enum ListingIntent {
    SetRestaurants(Vec<RestaurantSummary>),
    SetRestaurant(Option<RestaurantDetail>),
}

impl Intent for ListingIntent {}

pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingIntent::SetRestaurants(restaurants) => ListingState {
                restaurants,
                ..state
            },
            ListingIntent::SetRestaurant(restaurant) => ListingState {
                restaurant,
                ..state
            },
        }
    }
}

//! Regions, categories and the current filter selection.

use serde::Serialize;

use super::mvi::{Intent, Reducer, UiState};
use crate::model::{Category, Region};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
    pub selected_region: Option<Region>,
    pub selected_category: Option<Category>,
}

impl UiState for CatalogState {}

impl CatalogState {
    /// Both filters are needed before restaurants can be listed.
    pub fn filter(&self) -> Option<(&Region, &Category)> {
        Some((self.selected_region.as_ref()?, self.selected_category.as_ref()?))
    }
}

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    SetRegions(Vec<Region>),
    SetCategories(Vec<Category>),
    /// Resolve the id against the loaded regions. No match clears the selection.
    SelectRegion(u64),
    SelectCategory(u64),
}

impl Intent for CatalogIntent {}

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::SetRegions(regions) => CatalogState { regions, ..state },
            CatalogIntent::SetCategories(categories) => CatalogState {
                categories,
                ..state
            },
            CatalogIntent::SelectRegion(region_id) => {
                let selected_region = state.regions.iter().find(|r| r.id == region_id).cloned();
                CatalogState {
                    selected_region,
                    ..state
                }
            }
            CatalogIntent::SelectCategory(category_id) => {
                let selected_category = state
                    .categories
                    .iter()
                    .find(|c| c.id == category_id)
                    .cloned();
                CatalogState {
                    selected_category,
                    ..state
                }
            }
        }
    }
}

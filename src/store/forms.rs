//! Review and login drafts.
//!
//! Both forms merge one named field at a time; the other fields are kept.
//! Names the form does not have are ignored.

use super::action::FieldChange;
use super::mvi::{Intent, Reducer, UiState};
use crate::model::{LoginFields, ReviewFields};
use crate::secret::SecureString;

impl Intent for FieldChange {}

impl UiState for ReviewFields {}

impl UiState for LoginFields {}

pub struct ReviewFieldsReducer;

impl Reducer for ReviewFieldsReducer {
    type State = ReviewFields;
    type Intent = FieldChange;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let FieldChange { name, value } = intent;
        match name.as_str() {
            "score" => ReviewFields {
                score: value,
                ..state
            },
            "description" => ReviewFields {
                description: value,
                ..state
            },
            other => {
                tracing::debug!(field = other, "ignoring unknown review field");
                state
            }
        }
    }
}

pub struct LoginFieldsReducer;

impl Reducer for LoginFieldsReducer {
    type State = LoginFields;
    type Intent = FieldChange;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let FieldChange { name, value } = intent;
        match name.as_str() {
            "email" => LoginFields {
                email: value,
                ..state
            },
            "password" => LoginFields {
                password: SecureString::new(value),
                ..state
            },
            other => {
                tracing::debug!(field = other, "ignoring unknown login field");
                state
            }
        }
    }
}

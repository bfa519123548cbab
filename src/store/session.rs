//! Authenticated session.

use serde::Serialize;

use super::mvi::{Intent, Reducer, UiState};
use crate::secret::SecureString;

/// `access_token` absent means logged out.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub access_token: Option<SecureString>,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum SessionIntent {
    SetAccessToken(String),
    DeleteAccessToken,
}

impl Intent for SessionIntent {}

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetAccessToken(token) => SessionState {
                access_token: Some(SecureString::new(token)),
            },
            SessionIntent::DeleteAccessToken => SessionState { access_token: None },
        }
    }
}

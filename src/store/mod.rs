//! Client state layer.
//!
//! - [`action`]: what can happen
//! - [`AppState`]: what is true right now
//! - [`reduce`]: pure `(State, Action) -> State`, composed from per-entity
//!   sub-reducers
//! - [`Store`]: runs the reducer and notifies subscribers
//! - [`Effects`]: async action creators that talk to the API and storage

pub mod action;
mod catalog;
mod dispatch;
mod effects;
mod forms;
mod listing;
pub mod mvi;
mod reducer;
mod session;
mod state;

pub use action::{Action, FieldChange};
pub use catalog::{CatalogIntent, CatalogReducer, CatalogState};
pub use dispatch::{Dispatch, Store};
pub use effects::{EffectError, Effects};
pub use forms::{LoginFieldsReducer, ReviewFieldsReducer};
pub use listing::{ListingIntent, ListingReducer, ListingState};
pub use reducer::{reduce, AppReducer};
pub use session::{SessionIntent, SessionReducer, SessionState};
pub use state::AppState;

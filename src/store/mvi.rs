//! Unidirectional data-flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────── Effects ←────────────┘
//! ```
//!
//! Each sub-reducer owns one slice of [`AppState`](super::AppState) and
//! its own intent type; the top-level reducer routes actions to them.

/// Marker trait for the inputs of a reducer.
pub trait Intent: Send + 'static {}

/// Marker trait for a slice of application state.
///
/// States are plain values: cloned to be shared, compared to detect
/// changes, and defaulted to form the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Transforms state based on intents.
///
/// This is the only place where state transitions happen, and it must stay
/// pure: `(State, Intent) -> State`, no I/O.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

//! EatGo client: restaurant discovery state layer.
//!
//! The [`store`] module holds the state container (actions, reducer,
//! effects); [`api`] and [`storage`] are the collaborators it drives.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod secret;
pub mod storage;
pub mod store;

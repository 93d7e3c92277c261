//! Pokedex TUI
//!
//! Library half of the binary: state, reducer, API client and components,
//! exposed for the integration tests.

pub mod action;
pub mod api;
pub mod artwork;
pub mod components;
pub mod effect;
pub mod format;
pub mod lookup;
pub mod reducer;
pub mod state;

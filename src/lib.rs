//! Pokedex TUI
//!
//! Browse a pokemon list served by a local API: search by name, sort,
//! filter by generation and switch between French and English.

pub mod action;
pub mod api;
pub mod catalog;
pub mod components;
pub mod config;
pub mod effect;
pub mod i18n;
pub mod logging;
pub mod reducer;
pub mod state;

//! Shared model and client-side logic for the space operations dashboard.
//!
//! Everything the browser frontend decides lives here so it can be exercised
//! natively: entity records and their descriptors, draft coercion, summary
//! derivation, the gateway contract, and the per-entity manager that drives
//! load, submit, delete and search.

pub mod config;
pub mod display;
pub mod draft;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod model;
pub mod requests;
pub mod scoring;
pub mod summary;
pub mod tasks;

#[cfg(test)]
mod testing;

/// Number of records shown in each entity table.
pub const TABLE_PREVIEW_ROWS: usize = 5;

/// Number of cards in the recent tracking activity strip.
pub const RECENT_TRACKING_CARDS: usize = 3;

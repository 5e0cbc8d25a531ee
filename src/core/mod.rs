// Showroom - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or touch the filesystem.

pub mod carousel;
pub mod catalog;
pub mod export;
pub mod model;
pub mod preview;
pub mod query;

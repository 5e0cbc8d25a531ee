// Showroom - lib.rs
//
// Library entry point, exposing the catalog, query engine and presentation
// modules to the `showroom` binary and to integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;

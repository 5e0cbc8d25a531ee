// Showroom - ui/mod.rs
//
// UI layer: presentation only. Renders catalog views to plain text.
// Dependencies: app (state), core (read-only models).
// Must NOT depend on: platform, direct I/O.

pub mod cards;
pub mod detail;

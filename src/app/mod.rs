// Showroom - app/mod.rs
//
// Application layer: orchestration, state management, catalog loading,
// rotation timing and the booking boundary.
// Dependencies: core layer.

pub mod booking;
pub mod loader;
pub mod rotation;
pub mod session;
pub mod state;

pub mod builds;
pub mod state;

pub mod clip;
pub mod error;
pub mod profile;
pub mod state;

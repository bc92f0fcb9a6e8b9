//! Cascade state and override mode.

pub mod cascade;
pub mod overrides;

pub use cascade::{CascadeState, InitialValues, PendingRestore};
pub use overrides::OverrideMode;

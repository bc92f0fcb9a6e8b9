//! The cascade engine: pure decision logic for the selector.
//!
//! The engine consumes [`CascadeEvent`]s, mutates a [`CascadeState`] and
//! returns a [`Transition`] describing what the host form should do (form
//! effects), which lookup to launch (at most one), and which event to feed
//! back next. It performs no I/O itself; the [`controller`] drives it.
//!
//! [`CascadeState`]: crate::state::CascadeState
//! [`controller`]: crate::controller

pub mod engine;
pub mod events;

pub use engine::{CascadeContext, CascadeEngine, Transition};
pub use events::{CascadeEvent, CascadeLevel, LookupRequest};

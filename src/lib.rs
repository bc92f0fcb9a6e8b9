//! Cascading school selector for a student-competition registration form.
//!
//! This library implements the county → district → school dependent-select
//! state machine used by the registration/profile form: asynchronous
//! district and school lookups, edit-mode restoration of previously saved
//! values, two mutually exclusive override checkboxes ("no school" and
//! "school not found"), and diacritic-insensitive school-name autocomplete.
//!
//! The design follows the effects-as-data pattern:
//! - The [`cascade::CascadeEngine`] is pure: it maps an event plus the
//!   current [`state::CascadeState`] to a list of [`effects::FormEffect`]
//!   values and, possibly, a lookup request or a synthesized follow-up event.
//! - Effects are applied by a [`effects::FormBinding`] implementation (the
//!   host form, or the in-memory [`form::FormModel`] for tests).
//! - Lookups run through the [`lookup::LookupClient`] seam; responses are
//!   fed back into the engine as events, guarded by per-level request
//!   generations so a stale response is never applied.
//!
//! The [`controller::CascadeController`] ties the three together.

pub mod autocomplete;
pub mod cascade;
pub mod controller;
pub mod effects;
pub mod form;
pub mod lookup;
pub mod normalize;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

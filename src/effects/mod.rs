//! Effects-as-data for form-control mutations.
//!
//! The cascade engine never touches a control directly: it returns
//! `FormEffect` values describing the mutations, and a [`FormBinding`]
//! applies them. This keeps the decision logic pure and testable without a
//! form, and makes every intended mutation loggable.

pub mod binding;
pub mod form;

pub use binding::FormBinding;
pub use form::{FormControl, FormEffect, GradeLock, NO_SCHOOL_GRADE, OverrideFlag};

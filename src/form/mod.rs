//! An in-memory rendition of the selector's form controls.

pub mod model;

pub use model::{CheckboxField, FormModel, GradeField, SelectField, TextField};

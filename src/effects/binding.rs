//! The seam between computed effects and the host form.

use super::FormEffect;

/// Applies form effects to the host form's controls.
///
/// Implementations are synchronous: writing a value or toggling a disabled
/// flag on a form control does not suspend. The associated `Error` lets a
/// DOM-backed binding report a missing or detached control; the in-memory
/// [`crate::form::FormModel`] is infallible.
///
/// # Example (recording binding for tests)
///
/// ```ignore
/// struct Recorder(Vec<FormEffect>);
///
/// impl FormBinding for Recorder {
///     type Error = std::convert::Infallible;
///
///     fn apply(&mut self, effect: FormEffect) -> Result<(), Self::Error> {
///         self.0.push(effect);
///         Ok(())
///     }
/// }
/// ```
pub trait FormBinding {
    /// The error type returned when an effect cannot be applied.
    type Error;

    /// Apply a single effect to the form.
    fn apply(&mut self, effect: FormEffect) -> Result<(), Self::Error>;
}

//! Sequential execution of fallible steps.
//!
//! [`process`] runs a list of zero-argument steps in order and stops at the
//! first one that fails. Every step shares the same error type `E`, and the
//! error is handed back to the caller exactly as the step produced it.
//!
//! # Examples
//!
//! ```rust
//! use fungi::control::process;
//!
//! let steps: [fn() -> Result<(), String>; 3] = [
//!     || Ok(()),
//!     || Err("disk full".to_string()),
//!     || Ok(()),
//! ];
//! assert_eq!(process(steps), Err("disk full".to_string()));
//! ```
//!
//! Steps that capture different environments have different closure types, so
//! a runtime-built list boxes them as [`Step`]. For a fixed list written at the
//! call site, the [`process!`](crate::process) macro avoids the boxing.

use crate::trace::short_circuited;

/// A boxed, single-use fallible step.
///
/// Used to collect heterogeneous closures into one `Vec` for [`process`].
///
/// # Examples
///
/// ```rust
/// use fungi::control::{Step, process};
///
/// let mut opened = false;
/// let mut written = false;
///
/// let steps: Vec<Step<'_, &str>> = vec![
///     Box::new(|| {
///         opened = true;
///         Ok(())
///     }),
///     Box::new(|| {
///         written = true;
///         Ok(())
///     }),
/// ];
///
/// assert_eq!(process(steps), Ok(()));
/// assert!(opened && written);
/// ```
pub type Step<'a, E> = Box<dyn FnOnce() -> Result<(), E> + 'a>;

/// Executes each step in order, returning the first error encountered.
///
/// Once a step returns `Err`, no later step is invoked and the error is
/// returned unchanged. An empty list of steps succeeds.
///
/// # Arguments
///
/// * `steps` - The steps to run, in the order they should run
///
/// # Errors
///
/// Returns the error produced by the first failing step.
///
/// # Examples
///
/// ```rust
/// use fungi::control::process;
///
/// let no_steps: [fn() -> Result<(), i32>; 0] = [];
/// assert_eq!(process(no_steps), Ok(()));
///
/// fn check_config() -> Result<(), i32> { Ok(()) }
/// fn check_network() -> Result<(), i32> { Err(7) }
///
/// let steps: [fn() -> Result<(), i32>; 2] = [check_config, check_network];
/// assert_eq!(process(steps), Err(7));
/// ```
pub fn process<E, I>(steps: I) -> Result<(), E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Result<(), E>,
{
    for (position, step) in steps.into_iter().enumerate() {
        step().inspect_err(|_| short_circuited("process", position))?;
    }
    Ok(())
}

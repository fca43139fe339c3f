//! The `process!` macro for running heterogeneous fallible steps.
//!
//! This module provides the [`process!`] macro, the call-site counterpart of
//! [`process`](super::process()). Each argument may be a different closure type
//! or function item, so no boxing is needed.

/// Runs fallible steps in order, stopping at the first error.
///
/// `process!(f, g, h)` calls `f()`, then `g()`, then `h()`, and evaluates to
/// the first `Err` returned, or `Ok(())` if every step succeeds. Steps after a
/// failing one are never evaluated or called.
///
/// # Syntax
///
/// - `process!()` - Evaluates to `Ok(())`
/// - `process!(f)` - Calls `f` and returns its result
/// - `process!(f, g, ...)` - Calls each step in order until one fails
///
/// # Type Requirements
///
/// Every step must be callable with no arguments and return
/// `Result<(), E>` for one shared error type `E`. The error is not converted
/// with `From`; it is returned as is.
///
/// # Examples
///
/// ## Mixed closures and functions
///
/// ```
/// use fungi::process;
///
/// fn validate() -> Result<(), String> { Ok(()) }
///
/// let mut saved = Vec::new();
/// let result = process!(
///     validate,
///     || {
///         saved.push("record");
///         Ok(())
///     },
///     || Err("quota exceeded".to_string()),
/// );
///
/// assert_eq!(result, Err("quota exceeded".to_string()));
/// assert_eq!(saved, vec!["record"]);
/// ```
///
/// ## Later steps are skipped
///
/// ```
/// use fungi::process;
///
/// let mut ran_cleanup = false;
/// let result: Result<(), i32> = process!(|| Err(1), || {
///     ran_cleanup = true;
///     Ok(())
/// });
///
/// assert_eq!(result, Err(1));
/// assert!(!ran_cleanup);
/// ```
#[macro_export]
macro_rules! process {
    // No steps: nothing can fail
    () => {
        ::core::result::Result::Ok(())
    };

    // One or more steps: run left to right, break out on the first error
    ($($step:expr),+ $(,)?) => {
        'process: {
            $(
                let outcome: ::core::result::Result<(), _> = ($step)();
                if let ::core::result::Result::Err(error) = outcome {
                    break 'process ::core::result::Result::Err(error);
                }
            )+
            ::core::result::Result::Ok(())
        }
    };
}

//! Sequential control over fallible steps.
//!
//! This module provides:
//!
//! - [`process()`]: Run an ordered list of steps, stopping at the first error
//! - [`Step`]: Boxed step type for lists assembled at runtime
//! - [`process!`](crate::process): The same, for steps written at the call site
//!
//! # Examples
//!
//! ```rust
//! use fungi::control::{Step, process};
//!
//! fn migrate(table: &'static str) -> Step<'static, String> {
//!     Box::new(move || {
//!         if table == "invoices" {
//!             Err(format!("cannot migrate {table}"))
//!         } else {
//!             Ok(())
//!         }
//!     })
//! }
//!
//! let steps: Vec<_> = ["users", "orders", "invoices", "audit"]
//!     .into_iter()
//!     .map(migrate)
//!     .collect();
//!
//! assert_eq!(process(steps), Err("cannot migrate invoices".to_string()));
//! ```

mod process;
mod process_macro;

pub use process::{Step, process};

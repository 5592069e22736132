//! Tag resolution, version increment and tag-history linting
//!
//! Everything here is pure with respect to process state: no logging, no
//! exits, no retries. Conditions are returned to the caller as values.

pub mod increment;
pub mod lint;
pub mod resolver;

pub use increment::{Baseline, Increment, Incrementor};
pub use lint::{lint, Finding, LintReport, LINT_WINDOW};
pub use resolver::TagResolver;

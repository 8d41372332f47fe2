//! Structural validators and extended invariant checks.
//!
//! Each check is a pure function from a [`Diagram`](crate::store::Diagram) to a
//! [`CheckResult`]. The [`Validator`] runs them all and folds the results into a
//! [`ValidationReport`]. Nothing here returns an error: an invalid diagram is an
//! ordinary, inspectable outcome.

pub use self::options::{CheckOptions, TimescaleOrder};
pub use self::report::{
    CheckKind, CheckResult, FeedbackPath, TimescaleViolation, TypeError, ValidationReport, Violations,
};
pub use self::validator::{validate, Validator};

pub mod options;
pub mod report;
pub mod rules;
mod validator;

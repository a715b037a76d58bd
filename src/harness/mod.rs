//! Side-by-side strategy comparison.
//!
//! [`ComparisonHarness`] runs every registered strategy on the same query and
//! collects one [`RouteResult`](crate::models::RouteResult) per strategy in a
//! [`Comparison`].

mod comparison;

pub use comparison::{Comparison, ComparisonHarness};

//! Prelude module for the star_date crate.
//!
//! Re-exports the derive_more macros used across the date types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};

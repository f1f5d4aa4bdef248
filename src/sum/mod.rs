//! Recursive generic summation over nested JSON values.
//!
//! Input is first classified into the closed [`SumValue`] union, then
//! reduced by [`engine::sum`]. Classification and reduction are separate
//! so the dispatch policy is a plain match over variants instead of
//! runtime type inspection.

pub mod engine;
pub mod value;

pub use engine::{sum, SumError};
pub use value::SumValue;

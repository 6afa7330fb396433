//! Distance-matrix provider turning delimited text into tour edges.
//!
//! The first row names destination locations, every following row starts with
//! an origin location and lists distances to the header columns. Locations
//! are indexed by their position in the sorted label set, so the same matrix
//! always yields the same node ids.

mod delimiter;
mod errors;
mod matrix;
mod parse;

pub use delimiter::Delimiter;
pub use errors::DistanceMatrixError;
pub use matrix::DistanceMatrix;

#[cfg(test)]
mod tests;

//! Distance matrices.
//!
//! Provides a dense symmetric distance matrix, computed once at problem
//! construction and shared read-only by every search strategy.

mod matrix;

pub use matrix::DistanceMatrix;

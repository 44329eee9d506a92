//! Dynamic segment computers and curve decomposition
//!
//! This crate grows, shrinks and chains windows over ordered point sequences,
//! keeping the recognised primitive of each window up to date incrementally.
//!
//! # Components
//!
//! ## Segment computers
//! - **IncrementalSegmentComputer**: window `[front, back]` plus the state of
//!   a pluggable [`SegmentPredicate`]; extends at the back, retracts at the
//!   front, each in O(1) predicate calls
//!
//! ## Decompositions
//! - **Decomposer**: greedy partition into maximal-forward segments sharing
//!   one boundary point, on linear or cyclic sequences
//! - **MaximalSegmentCover**: sliding-window enumeration of all maximal
//!   segments (tangential cover)
//!
//! Both accept [`DecompositionParameters`] to restrict a pass to a sub-range
//! and report progress to an optional [`DecompositionObserver`].
//!
//! ## Usage
//!
//! ```rust
//! use dynseg_core::{Point2, PointSequence};
//! use dynseg_segmentation::{greedy_decomposition, predicates::NonDecreasingX};
//!
//! let points = [Point2::new(0, 0), Point2::new(1, 0), Point2::new(2, 1), Point2::new(1, 2)];
//! let result = greedy_decomposition(NonDecreasingX, &PointSequence::linear(&points)).unwrap();
//!
//! assert_eq!(result.segments()[0].len(), 3);
//! println!("{}", result);
//! ```

pub mod computer;
pub mod greedy;
pub mod observer;
pub mod predicates;
pub mod saturated;
pub mod traits;
pub mod types;

// Re-exports
pub use computer::IncrementalSegmentComputer;
pub use greedy::{decompose_batch, greedy_decomposition, Decomposer};
pub use saturated::{maximal_segments, MaximalSegmentCover};

// Core traits
pub use traits::{ConfigurableDecomposition, DynamicSegmentComputer, SegmentComputer};

pub use observer::{DecompositionObserver, NullObserver};
pub use types::{DecompositionParameters, DecompositionResult, EndMode, Segment};

pub use dynseg_core::SegmentPredicate;

//! Incremental segment recognition over discrete curves
//!
//! Umbrella crate for the dynseg workspace:
//!
//! - [`core`]: cursors, point types, predicates and errors (`dynseg-core`)
//! - [`segmentation`]: segment computers, greedy decomposition and maximal
//!   segment covers (`dynseg-segmentation`)
//!
//! The most common items are re-exported at the top level.
//!
//! ```rust
//! use dynseg::{greedy_decomposition, DirectionalRun, Point2, PointSequence};
//!
//! let contour: Vec<Point2> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
//!     .into_iter()
//!     .map(Point2::from)
//!     .collect();
//! let result = greedy_decomposition(DirectionalRun, &PointSequence::cyclic(&contour)).unwrap();
//! assert!(result.count() <= contour.len() + 1);
//! ```

pub use dynseg_core as core;
pub use dynseg_segmentation as segmentation;

pub use dynseg_core::{
    Coordinate, Error, Point2, PointSequence, Result, SegmentPredicate, SequenceCursor,
    SequenceMode, SliceCursor,
};
pub use dynseg_segmentation::predicates::{
    AcceptAll, BoundedLength, DirectionalRun, NonDecreasingX,
};
pub use dynseg_segmentation::{
    decompose_batch, greedy_decomposition, maximal_segments, ConfigurableDecomposition,
    Decomposer, DecompositionObserver, DecompositionParameters, DecompositionResult,
    DynamicSegmentComputer, EndMode, IncrementalSegmentComputer, MaximalSegmentCover,
    NullObserver, Segment, SegmentComputer,
};

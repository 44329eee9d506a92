//! Core traits and types for incremental segment recognition
//!
//! This crate provides the leaf layer of the dynseg workspace:
//!
//! 1. **Cursors** - positional, possibly cyclic views over ordered point
//!    sequences ([`SequenceCursor`], [`PointSequence`], [`SliceCursor`])
//! 2. **Predicates** - the pluggable, exactly reversible validity test that
//!    segment computers drive ([`SegmentPredicate`])
//! 3. **Errors** - the usage-error type shared by all dynseg crates
//!
//! Nothing here knows how segments are grown or how a curve is decomposed;
//! that lives in `dynseg-segmentation`.
//!
//! # Example
//!
//! ```rust
//! use dynseg_core::{PointSequence, SequenceCursor};
//!
//! let points = [(0, 0), (1, 0), (2, 1)];
//! let seq = PointSequence::cyclic(&points);
//! let mut cursor = seq.cursor_at(2).unwrap();
//! cursor.step().unwrap();
//! assert_eq!(cursor.point(), Some(&(0, 0)));
//! ```

pub mod cursor;
pub mod error;
pub mod point;
pub mod predicate;

// Re-export core types
pub use cursor::{PointSequence, SequenceCursor, SequenceMode, SliceCursor};
pub use error::{Error, Result};
pub use point::{Coordinate, Point2};
pub use predicate::SegmentPredicate;

//! Positional views over ordered point sequences
//!
//! A [`SequenceCursor`] is a bidirectional position inside an ordered
//! sequence of points. It carries no geometric knowledge: it can move, report
//! where it is and compare itself with other cursors of the same sequence.
//!
//! Sequences are either linear, with a one-past-the-end position, or cyclic,
//! where stepping wraps around and no end position exists.

use crate::{Error, Result};
use std::fmt;

/// Whether a sequence is open or closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceMode {
    /// Open sequence with a distinct end position
    #[default]
    Linear,
    /// Closed sequence; the successor of the last point is the first one
    Cyclic,
}

/// Bidirectional cursor over an ordered, read-only point sequence
///
/// Equality (`PartialEq`) means "same position in the same sequence".
pub trait SequenceCursor: Clone + PartialEq + fmt::Debug {
    /// Point type of the underlying sequence
    type Point;

    /// Whether the cursor is past the last point (never true for a
    /// non-empty cyclic sequence)
    fn is_at_end(&self) -> bool;

    /// Point under the cursor, `None` at end
    fn point(&self) -> Option<&Self::Point>;

    /// Advance one position
    ///
    /// Fails with [`Error::OutOfRange`] when already at end on a linear
    /// sequence. Wraps on a cyclic one.
    fn step(&mut self) -> Result<()>;

    /// Move back one position
    ///
    /// Fails with [`Error::OutOfRange`] at the first point of a linear
    /// sequence. Wraps on a cyclic one.
    fn step_back(&mut self) -> Result<()>;

    /// Number of forward steps needed to reach `other`
    ///
    /// `None` when `other` lies before `self` on a linear sequence or belongs
    /// to another sequence.
    fn distance_to(&self, other: &Self) -> Option<usize>;

    /// Offset of the cursor from the first point
    fn position(&self) -> usize;

    /// Number of points in the underlying sequence
    fn sequence_len(&self) -> usize;

    /// Whether the underlying sequence is cyclic
    fn is_cyclic(&self) -> bool;

    /// Cursor one step ahead, leaving `self` untouched
    fn successor(&self) -> Result<Self> {
        let mut next = self.clone();
        next.step()?;
        Ok(next)
    }

    /// Whether a point exists after the current one
    ///
    /// Always true on a non-empty cyclic sequence.
    fn has_successor(&self) -> bool {
        if self.is_cyclic() {
            self.sequence_len() > 0
        } else {
            self.position() + 1 < self.sequence_len()
        }
    }
}

/// Borrowed point sequence with an explicit open/closed mode
#[derive(Debug)]
pub struct PointSequence<'a, P> {
    points: &'a [P],
    mode: SequenceMode,
}

impl<P> Clone for PointSequence<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for PointSequence<'_, P> {}

impl<'a, P> PointSequence<'a, P> {
    /// Create a sequence view with the given mode
    pub fn new(points: &'a [P], mode: SequenceMode) -> Self {
        Self { points, mode }
    }

    /// Create an open sequence view
    pub fn linear(points: &'a [P]) -> Self {
        Self::new(points, SequenceMode::Linear)
    }

    /// Create a closed sequence view
    pub fn cyclic(points: &'a [P]) -> Self {
        Self::new(points, SequenceMode::Cyclic)
    }

    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    pub fn is_cyclic(&self) -> bool {
        self.mode == SequenceMode::Cyclic
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &'a [P] {
        self.points
    }

    /// Point at `position`, wrapping on cyclic sequences
    pub fn get(&self, position: usize) -> Option<&'a P> {
        match self.mode {
            SequenceMode::Linear => self.points.get(position),
            SequenceMode::Cyclic if self.points.is_empty() => None,
            SequenceMode::Cyclic => self.points.get(position % self.points.len()),
        }
    }

    /// Cursor on the first point (equal to `end()` for an empty sequence)
    pub fn begin(&self) -> SliceCursor<'a, P> {
        SliceCursor {
            points: self.points,
            index: 0,
            mode: self.mode,
        }
    }

    /// One-past-the-end cursor of a linear sequence
    ///
    /// A cyclic sequence has no end; its `end()` coincides with `begin()`.
    pub fn end(&self) -> SliceCursor<'a, P> {
        let index = match self.mode {
            SequenceMode::Linear => self.points.len(),
            SequenceMode::Cyclic => 0,
        };
        SliceCursor {
            points: self.points,
            index,
            mode: self.mode,
        }
    }

    /// Cursor at an arbitrary position
    ///
    /// Positions `0..=len` are valid on linear sequences (`len` being the end
    /// position), `0..len` on cyclic ones.
    pub fn cursor_at(&self, position: usize) -> Result<SliceCursor<'a, P>> {
        let limit = match self.mode {
            SequenceMode::Linear => self.points.len(),
            SequenceMode::Cyclic => self.points.len().saturating_sub(1),
        };
        if position > limit || (self.is_cyclic() && self.points.is_empty()) {
            return Err(Error::OutOfRange {
                position,
                len: self.points.len(),
            });
        }
        Ok(SliceCursor {
            points: self.points,
            index: position,
            mode: self.mode,
        })
    }
}

/// Cursor over a [`PointSequence`]
pub struct SliceCursor<'a, P> {
    points: &'a [P],
    index: usize,
    mode: SequenceMode,
}

impl<P> Clone for SliceCursor<'_, P> {
    fn clone(&self) -> Self {
        Self {
            points: self.points,
            index: self.index,
            mode: self.mode,
        }
    }
}

impl<P> PartialEq for SliceCursor<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.points, other.points) && self.index == other.index
    }
}

impl<P> Eq for SliceCursor<'_, P> {}

impl<P> fmt::Debug for SliceCursor<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.points.len())
            .field("mode", &self.mode)
            .finish()
    }
}

impl<'a, P> SliceCursor<'a, P> {
    /// Point under the cursor with the lifetime of the sequence
    pub fn get(&self) -> Option<&'a P> {
        self.points.get(self.index)
    }
}

impl<P> SequenceCursor for SliceCursor<'_, P> {
    type Point = P;

    fn is_at_end(&self) -> bool {
        self.index >= self.points.len()
    }

    fn point(&self) -> Option<&P> {
        self.points.get(self.index)
    }

    fn step(&mut self) -> Result<()> {
        let len = self.points.len();
        if self.index >= len {
            return Err(Error::OutOfRange {
                position: self.index + 1,
                len,
            });
        }
        self.index += 1;
        if self.mode == SequenceMode::Cyclic && self.index == len {
            self.index = 0;
        }
        Ok(())
    }

    fn step_back(&mut self) -> Result<()> {
        let len = self.points.len();
        match self.mode {
            SequenceMode::Cyclic if len > 0 => {
                self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
                Ok(())
            }
            _ if self.index == 0 => Err(Error::OutOfRange { position: 0, len }),
            _ => {
                self.index -= 1;
                Ok(())
            }
        }
    }

    fn distance_to(&self, other: &Self) -> Option<usize> {
        if !std::ptr::eq(self.points, other.points) {
            return None;
        }
        match self.mode {
            SequenceMode::Linear => other.index.checked_sub(self.index),
            SequenceMode::Cyclic => {
                let len = self.points.len();
                if len == 0 {
                    return Some(0);
                }
                Some((other.index + len - self.index) % len)
            }
        }
    }

    fn position(&self) -> usize {
        self.index
    }

    fn sequence_len(&self) -> usize {
        self.points.len()
    }

    fn is_cyclic(&self) -> bool {
        self.mode == SequenceMode::Cyclic
    }
}

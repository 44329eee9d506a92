//! Incremental segment computer
//!
//! [`IncrementalSegmentComputer`] wraps a window `[front, back]` over a
//! [`SequenceCursor`] and a [`SegmentPredicate`]. Each extension or retraction
//! asks the predicate for the updated primitive state in O(1) instead of
//! re-recognising the whole window.
//!
//! Every operation is atomic from the caller's point of view: the new state
//! is computed before the window is touched, and usage errors are detected
//! before anything is computed.

use crate::traits::{DynamicSegmentComputer, SegmentComputer};
use dynseg_core::{Error, Result, SegmentPredicate, SequenceCursor};
use std::fmt;
use tracing::trace;

/// Window and primitive state of an active computer
#[derive(Clone)]
struct Window<C, S> {
    front: C,
    back: C,
    len: usize,
    state: S,
}

/// Dynamic segment computer driven by a pluggable predicate
///
/// # Example
///
/// ```rust
/// use dynseg_core::{Point2, PointSequence};
/// use dynseg_segmentation::predicates::NonDecreasingX;
/// use dynseg_segmentation::{DynamicSegmentComputer, IncrementalSegmentComputer, SegmentComputer};
///
/// let points = [Point2::new(0, 0), Point2::new(1, 0), Point2::new(2, 1), Point2::new(1, 2)];
/// let seq = PointSequence::linear(&points);
///
/// let mut computer = IncrementalSegmentComputer::new(NonDecreasingX::new());
/// computer.init(seq.begin()).unwrap();
/// while computer.extend_forward().unwrap() {}
/// assert_eq!(computer.size().unwrap(), 3);
///
/// assert!(computer.retract_forward().unwrap());
/// assert_eq!(computer.front_point().unwrap(), &Point2::new(1, 0));
/// ```
pub struct IncrementalSegmentComputer<C, Pr>
where
    C: SequenceCursor,
    Pr: SegmentPredicate<C::Point>,
{
    predicate: Pr,
    window: Option<Window<C, Pr::State>>,
}

impl<C, Pr> IncrementalSegmentComputer<C, Pr>
where
    C: SequenceCursor,
    Pr: SegmentPredicate<C::Point>,
{
    /// Create an uninitialized computer
    pub fn new(predicate: Pr) -> Self {
        Self {
            predicate,
            window: None,
        }
    }

    /// Create a computer already initialized at `cursor`
    pub fn starting_at(predicate: Pr, cursor: C) -> Result<Self> {
        let mut computer = Self::new(predicate);
        computer.init(cursor)?;
        Ok(computer)
    }

    /// The predicate driving this computer
    pub fn predicate(&self) -> &Pr {
        &self.predicate
    }

    /// Drop the window, returning to the uninitialized state
    pub fn clear(&mut self) {
        self.window = None;
    }

    pub fn into_predicate(self) -> Pr {
        self.predicate
    }

    fn active(&self, operation: &str) -> Result<&Window<C, Pr::State>> {
        self.window
            .as_ref()
            .ok_or_else(|| Error::uninitialized(operation))
    }

    /// Cursor on the candidate point after the back of `window`
    ///
    /// `Ok(None)` when the window already spans a whole cyclic sequence.
    fn candidate(window: &Window<C, Pr::State>, operation: &str) -> Result<Option<C>> {
        if !window.back.has_successor() {
            return Err(Error::no_next_point(operation));
        }
        if window.back.is_cyclic() && window.len >= window.back.sequence_len() {
            return Ok(None);
        }
        window.back.successor().map(Some)
    }
}

impl<C, Pr> SegmentComputer for IncrementalSegmentComputer<C, Pr>
where
    C: SequenceCursor,
    Pr: SegmentPredicate<C::Point>,
{
    type Cursor = C;
    type State = Pr::State;

    fn algorithm_name(&self) -> &'static str {
        self.predicate.name()
    }

    fn init(&mut self, cursor: C) -> Result<()> {
        let state = match cursor.point() {
            Some(point) => self.predicate.initial_state(point),
            None => return Err(Error::exhausted_cursor("init")),
        };
        trace!(position = cursor.position(), "segment computer initialized");
        self.window = Some(Window {
            front: cursor.clone(),
            back: cursor,
            len: 1,
            state,
        });
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.window.is_some()
    }

    fn is_extendable(&self) -> Result<bool> {
        let window = self.active("is_extendable")?;
        let Some(next) = Self::candidate(window, "is_extendable")? else {
            return Ok(false);
        };
        let point = next
            .point()
            .ok_or_else(|| Error::no_next_point("is_extendable"))?;
        Ok(self.predicate.can_extend_front(&window.state, point))
    }

    fn extend_forward(&mut self) -> Result<bool> {
        let Some(window) = self.window.as_mut() else {
            return Err(Error::uninitialized("extend_forward"));
        };
        let Some(next) = Self::candidate(window, "extend_forward")? else {
            trace!(len = window.len, "window spans the whole cycle");
            return Ok(false);
        };

        let state = {
            let point = next
                .point()
                .ok_or_else(|| Error::no_next_point("extend_forward"))?;
            if !self.predicate.can_extend_front(&window.state, point) {
                trace!(position = next.position(), "extension rejected");
                return Ok(false);
            }
            self.predicate.apply_extend_front(&window.state, point)
        };

        window.back = next;
        window.len += 1;
        window.state = state;
        trace!(back = window.back.position(), len = window.len, "window extended");
        Ok(true)
    }

    fn front(&self) -> Result<&C> {
        Ok(&self.active("front")?.front)
    }

    fn back(&self) -> Result<&C> {
        Ok(&self.active("back")?.back)
    }

    fn size(&self) -> Result<usize> {
        Ok(self.active("size")?.len)
    }

    fn primitive_state(&self) -> Result<&Pr::State> {
        Ok(&self.active("primitive_state")?.state)
    }
}

impl<C, Pr> DynamicSegmentComputer for IncrementalSegmentComputer<C, Pr>
where
    C: SequenceCursor,
    Pr: SegmentPredicate<C::Point>,
{
    fn retract_forward(&mut self) -> Result<bool> {
        let Some(window) = self.window.as_mut() else {
            return Err(Error::uninitialized("retract_forward"));
        };
        if window.len <= 1 {
            return Ok(false);
        }

        let new_front = window.front.successor()?;
        let state = {
            let removed = window
                .front
                .point()
                .ok_or_else(|| Error::PreconditionViolation("front cursor is at end".into()))?;
            let kept = new_front.point().ok_or_else(|| {
                Error::PreconditionViolation("window front ran off the sequence".into())
            })?;
            self.predicate.apply_retract_back(&window.state, removed, kept)
        };

        window.front = new_front;
        window.len -= 1;
        window.state = state;
        trace!(front = window.front.position(), len = window.len, "window retracted");
        Ok(true)
    }
}

impl<C, Pr> Clone for IncrementalSegmentComputer<C, Pr>
where
    C: SequenceCursor,
    Pr: SegmentPredicate<C::Point> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            window: self.window.clone(),
        }
    }
}

impl<C, Pr> fmt::Debug for IncrementalSegmentComputer<C, Pr>
where
    C: SequenceCursor,
    Pr: SegmentPredicate<C::Point>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("IncrementalSegmentComputer");
        s.field("predicate", &self.predicate.name());
        match &self.window {
            Some(window) => s
                .field("front", &window.front.position())
                .field("back", &window.back.position())
                .field("len", &window.len)
                .field("state", &window.state),
            None => s.field("window", &"uninitialized"),
        };
        s.finish()
    }
}

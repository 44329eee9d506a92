//! Window length limits

use dynseg_core::{Error, Result, SegmentPredicate};

/// State of a [`BoundedLength`] window
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedState<S> {
    pub inner: S,
    pub len: usize,
}

/// Restricts another predicate to windows of at most `max_len` points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedLength<Pr> {
    inner: Pr,
    max_len: usize,
}

impl<Pr> BoundedLength<Pr> {
    /// Wrap `inner`; `max_len` must be at least one
    pub fn new(inner: Pr, max_len: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(Error::InvalidParameter(
                "maximum segment length must be at least 1".to_string(),
            ));
        }
        Ok(Self { inner, max_len })
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn inner(&self) -> &Pr {
        &self.inner
    }
}

impl<P, Pr: SegmentPredicate<P>> SegmentPredicate<P> for BoundedLength<Pr> {
    type State = BoundedState<Pr::State>;

    fn initial_state(&self, point: &P) -> Self::State {
        BoundedState {
            inner: self.inner.initial_state(point),
            len: 1,
        }
    }

    fn can_extend_front(&self, state: &Self::State, next: &P) -> bool {
        state.len < self.max_len && self.inner.can_extend_front(&state.inner, next)
    }

    fn apply_extend_front(&self, state: &Self::State, next: &P) -> Self::State {
        BoundedState {
            inner: self.inner.apply_extend_front(&state.inner, next),
            len: state.len + 1,
        }
    }

    fn apply_retract_back(&self, state: &Self::State, removed: &P, new_front: &P) -> Self::State {
        BoundedState {
            inner: self.inner.apply_retract_back(&state.inner, removed, new_front),
            len: state.len - 1,
        }
    }

    fn name(&self) -> &'static str {
        "BoundedLength"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::AcceptAll;

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            BoundedLength::new(AcceptAll, 0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_limit_applies() {
        let bounded = BoundedLength::new(AcceptAll, 3).unwrap();
        assert!(bounded.evaluate(&[1, 2, 3]).is_some());
        assert!(bounded.evaluate(&[1, 2, 3, 4]).is_none());
        assert_eq!(bounded.evaluate(&[9]).map(|s| s.len), Some(1));
    }
}

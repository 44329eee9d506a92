//! Algebraic laws of the incremental segment computer

mod common;

use common::{clouds, paths};
use dynseg_core::{Point2, PointSequence, SegmentPredicate, SequenceCursor};
use dynseg_segmentation::predicates::{BoundedLength, DirectionalRun, NonDecreasingX};
use dynseg_segmentation::{DynamicSegmentComputer, IncrementalSegmentComputer, SegmentComputer};
use proptest::prelude::*;

/// Apply a script of extend (`true`) / retract (`false`) calls and check the
/// state against a from-scratch evaluation after every step
fn check_no_drift<Pr>(predicate: Pr, data: &[Point2], script: &[bool]) -> Result<(), TestCaseError>
where
    Pr: SegmentPredicate<Point2> + Clone,
{
    let seq = PointSequence::linear(data);
    let mut computer =
        IncrementalSegmentComputer::starting_at(predicate.clone(), seq.begin()).unwrap();

    for &extend in script {
        if extend {
            if !computer.has_next().unwrap() {
                continue;
            }
            computer.extend_forward().unwrap();
        } else {
            computer.retract_forward().unwrap();
        }

        let front = computer.front().unwrap().position();
        let back = computer.back().unwrap().position();
        prop_assert_eq!(computer.size().unwrap(), back - front + 1);

        let expected = predicate.evaluate(&data[front..=back]);
        prop_assert_eq!(Some(computer.primitive_state().unwrap().clone()), expected);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_directional_state_never_drifts(
        data in paths(40),
        script in prop::collection::vec(any::<bool>(), 0..120),
    ) {
        check_no_drift(DirectionalRun, &data, &script)?;
    }

    #[test]
    fn prop_monotone_state_never_drifts(
        data in clouds(40),
        script in prop::collection::vec(any::<bool>(), 0..120),
    ) {
        check_no_drift(NonDecreasingX, &data, &script)?;
    }

    #[test]
    fn prop_bounded_state_never_drifts(
        data in paths(40),
        max_len in 1usize..6,
        script in prop::collection::vec(any::<bool>(), 0..120),
    ) {
        let bounded = BoundedLength::new(DirectionalRun, max_len).unwrap();
        check_no_drift(bounded, &data, &script)?;
    }

    #[test]
    fn prop_extend_and_retract_commute(
        data in paths(30),
        warmup in 0usize..30,
    ) {
        let seq = PointSequence::linear(&data);
        let mut computer =
            IncrementalSegmentComputer::starting_at(DirectionalRun, seq.begin()).unwrap();
        for _ in 0..warmup {
            if !computer.has_next().unwrap() || !computer.extend_forward().unwrap() {
                break;
            }
        }
        if computer.size().unwrap() < 2 || !computer.has_next().unwrap() {
            return Ok(());
        }

        let mut extend_first = computer.clone();
        let mut retract_first = computer;

        let extended = extend_first.extend_forward().unwrap();
        prop_assert!(retract_first.retract_forward().unwrap());
        // Dropping the first point never makes the next point inadmissible
        let re_extended = retract_first.extend_forward().unwrap();
        prop_assert!(re_extended || !extended);
        if !extended {
            return Ok(());
        }
        prop_assert!(extend_first.retract_forward().unwrap());

        prop_assert_eq!(extend_first.front().unwrap(), retract_first.front().unwrap());
        prop_assert_eq!(extend_first.back().unwrap(), retract_first.back().unwrap());
        prop_assert_eq!(
            extend_first.primitive_state().unwrap(),
            retract_first.primitive_state().unwrap()
        );
    }

    #[test]
    fn prop_single_point_window_cannot_retract(
        data in clouds(20),
        start in 0usize..20,
    ) {
        let seq = PointSequence::linear(&data);
        let position = start % data.len();
        let cursor = seq.cursor_at(position).unwrap();
        let mut computer = IncrementalSegmentComputer::starting_at(NonDecreasingX, cursor).unwrap();

        let state = computer.primitive_state().unwrap().clone();
        prop_assert!(!computer.retract_forward().unwrap());
        prop_assert_eq!(computer.size().unwrap(), 1);
        prop_assert_eq!(computer.front().unwrap().position(), position);
        prop_assert_eq!(computer.primitive_state().unwrap(), &state);
    }
}

#[test]
fn extend_then_retract_slides_single_point_window() {
    let data = common::chain(&[0, 0, 1]);
    let seq = PointSequence::linear(&data);
    let mut computer =
        IncrementalSegmentComputer::starting_at(DirectionalRun, seq.begin()).unwrap();

    assert!(computer.extend_forward().unwrap());
    assert!(computer.retract_forward().unwrap());
    assert_eq!(computer.size().unwrap(), 1);
    assert_eq!(
        computer.primitive_state().unwrap(),
        &DirectionalRun.initial_state(&data[1])
    );
}

#[test]
fn usage_errors_leave_window_untouched() {
    let data = common::chain(&[0, 0]);
    let seq = PointSequence::linear(&data);
    let mut computer =
        IncrementalSegmentComputer::starting_at(DirectionalRun, seq.begin()).unwrap();
    assert!(computer.extend_forward().unwrap());
    assert!(computer.extend_forward().unwrap());
    let state = computer.primitive_state().unwrap().clone();

    assert!(computer.extend_forward().is_err());
    assert!(computer.is_extendable().is_err());
    assert!(computer.init(seq.end()).is_err());

    assert_eq!(computer.size().unwrap(), 3);
    assert_eq!(computer.primitive_state().unwrap(), &state);
}

//! End-to-end usage through the umbrella crate with a user-defined predicate

use anyhow::Result;
use dynseg::{
    decompose_batch, greedy_decomposition, maximal_segments, ConfigurableDecomposition,
    Decomposer, DecompositionParameters, DirectionalRun, EndMode, IncrementalSegmentComputer,
    Point2, PointSequence, SegmentPredicate,
};
use proptest::prelude::*;
use tracing::info_span;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Horizontal runs: every point shares the row of the first one
#[derive(Debug, Clone, Copy)]
struct SameRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowState {
    y: i64,
    len: usize,
}

impl SegmentPredicate<Point2> for SameRow {
    type State = RowState;

    fn initial_state(&self, point: &Point2) -> RowState {
        RowState { y: point.y, len: 1 }
    }

    fn can_extend_front(&self, state: &RowState, next: &Point2) -> bool {
        next.y == state.y
    }

    fn apply_extend_front(&self, state: &RowState, _next: &Point2) -> RowState {
        RowState {
            y: state.y,
            len: state.len + 1,
        }
    }

    fn apply_retract_back(
        &self,
        state: &RowState,
        _removed: &Point2,
        _new_front: &Point2,
    ) -> RowState {
        RowState {
            y: state.y,
            len: state.len - 1,
        }
    }

    fn name(&self) -> &'static str {
        "SameRow"
    }
}

fn staircase() -> Vec<Point2> {
    [(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (4, 1), (4, 2)]
        .into_iter()
        .map(Point2::from)
        .collect()
}

#[test]
fn custom_predicate_drives_greedy_decomposition() -> Result<()> {
    init_tracing();
    let _span = info_span!("custom_predicate").entered();

    let data = staircase();
    let result = greedy_decomposition(SameRow, &PointSequence::linear(&data))?;
    let bounds: Vec<_> = result.iter().map(|s| (s.start(), s.end())).collect();
    assert_eq!(bounds, vec![(0, 2), (2, 2), (3, 5), (5, 5), (6, 6)]);
    assert_eq!(result.algorithm(), "SameRow");
    assert_eq!(result.covered_positions(), (0..data.len()).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn custom_predicate_drives_maximal_cover() -> Result<()> {
    let data = staircase();
    let result = maximal_segments(SameRow, &PointSequence::linear(&data))?;
    let rows: Vec<_> = result.iter().map(|s| (s.state().y, s.len())).collect();
    assert_eq!(rows, vec![(0, 3), (1, 3), (2, 1)]);
    Ok(())
}

#[test]
fn closed_contour_is_split_at_its_corners() -> Result<()> {
    init_tracing();
    // 3x3 square traversed counter-clockwise
    let contour: Vec<Point2> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
        .into_iter()
        .map(Point2::from)
        .collect();
    let result = greedy_decomposition(DirectionalRun, &PointSequence::cyclic(&contour))?;

    assert!(result.is_cyclic());
    let bounds: Vec<_> = result.iter().map(|s| (s.start(), s.end())).collect();
    assert_eq!(bounds, vec![(0, 2), (2, 4), (4, 6), (6, 0)]);
    assert!(result.segments().last().is_some_and(|s| s.wraps()));
    Ok(())
}

#[test]
fn batch_matches_individual_runs() -> Result<()> {
    let first = staircase();
    let second: Vec<Point2> = (0..10).map(|i| Point2::new(i, i / 3)).collect();
    let sequences = [PointSequence::linear(&first), PointSequence::linear(&second)];
    let params = DecompositionParameters::default();

    let batch = decompose_batch(&SameRow, &sequences, &params)?;
    assert_eq!(batch.len(), 2);
    for (sequence, result) in sequences.iter().zip(&batch) {
        let single = greedy_decomposition(SameRow, sequence)?;
        assert_eq!(single.segments(), result.segments());
    }
    Ok(())
}

#[test]
fn configured_range_limits_the_pass() -> Result<()> {
    let data = staircase();
    let seq = PointSequence::linear(&data);
    let mut decomposer = Decomposer::new(IncrementalSegmentComputer::new(SameRow))
        .with_parameters(DecompositionParameters::with_range(3..5, EndMode::Truncate));
    let result = decomposer.decompose_sequence(&seq)?;

    let bounds: Vec<_> = result.iter().map(|s| (s.start(), s.end())).collect();
    assert_eq!(bounds, vec![(3, 4)]);

    decomposer.set_parameters(DecompositionParameters::with_range(3..5, EndMode::DoNotTruncate));
    let result = decomposer.decompose_sequence(&seq)?;
    let bounds: Vec<_> = result.iter().map(|s| (s.start(), s.end())).collect();
    // The segment covering the last range point may run past the range
    assert_eq!(bounds, vec![(3, 5)]);
    Ok(())
}

proptest! {
    #[test]
    fn prop_rows_are_recovered(lengths in prop::collection::vec(1usize..6, 1..8)) {
        // Rows of the given lengths, stacked one above the other
        let data: Vec<Point2> = lengths
            .iter()
            .enumerate()
            .flat_map(|(row, &len)| (0..len as i64).map(move |x| Point2::new(x, row as i64)))
            .collect();
        let result = maximal_segments(SameRow, &PointSequence::linear(&data)).unwrap();
        let recovered: Vec<_> = result.iter().map(|s| s.len()).collect();
        prop_assert_eq!(recovered, lengths);
    }
}

//! Shared utilities for integration tests

#![allow(dead_code)]

use dynseg_core::Point2;
use proptest::prelude::*;

pub const DIRECTIONS: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// 8-connected path following the given Freeman codes from the origin
pub fn chain(codes: &[usize]) -> Vec<Point2> {
    let mut current = Point2::new(0i64, 0);
    let mut out = vec![current];
    for &code in codes {
        let (dx, dy) = DIRECTIONS[code % 8];
        current = Point2::new(current.x + dx, current.y + dy);
        out.push(current);
    }
    out
}

/// Random 8-connected paths of 1 to `max_len` points
pub fn paths(max_len: usize) -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec(0usize..8, 0..max_len).prop_map(|codes| chain(&codes))
}

/// Random point clouds with small coordinates
pub fn clouds(max_len: usize) -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-5i64..5, -5i64..5), 1..max_len)
        .prop_map(|coords| coords.into_iter().map(Point2::from).collect())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

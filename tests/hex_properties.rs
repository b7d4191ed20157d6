//! Run with: `cargo test --test hex_properties`

use hexcoord::{
    hex::{CoordMode, ModeFamily},
    HexCoord,
};
use itertools::iproduct;
use std::collections::HashSet;

const RANGE: std::ops::RangeInclusive<i32> = -8..=8;

fn coords() -> impl Iterator<Item = HexCoord> + Clone {
    iproduct!(RANGE, RANGE).map(|(x, y)| HexCoord::new(x, y))
}

fn modes(family: ModeFamily) -> impl Iterator<Item = CoordMode> + Clone {
    CoordMode::ALL.into_iter().filter(move |mode| mode.family() == family)
}

#[test]
fn test_components_sum_to_zero() {
    for coord in coords() {
        assert_eq!(coord.iter().sum::<i32>(), 0, "{}", coord);
        let (x, y, z) = coord.as_cubic();
        assert_eq!(HexCoord::try_new(x, y, z), Ok(coord));
    }
}

#[test]
fn test_offset_round_trip() {
    for (mode, col, row) in iproduct!(modes(ModeFamily::Offset), RANGE, RANGE) {
        let coord = HexCoord::from_offset(mode, col, row).unwrap();
        assert_eq!(
            coord.as_offset(mode).unwrap(),
            (col, row),
            "{} via {}",
            coord,
            mode
        );
    }
}

#[test]
fn test_offset_is_a_bijection() {
    for mode in modes(ModeFamily::Offset) {
        let cells: HashSet<_> = iproduct!(RANGE, RANGE)
            .map(|(col, row)| HexCoord::from_offset(mode, col, row).unwrap())
            .collect();
        assert_eq!(cells.len(), RANGE.count() * RANGE.count(), "{}", mode);
    }
}

#[test]
fn test_double_round_trip() {
    let doubled_pairs = iproduct!(RANGE, RANGE).filter(|(col, row)| (col - row) % 2 == 0);
    for ((col, row), mode) in iproduct!(doubled_pairs, modes(ModeFamily::Double)) {
        let coord = HexCoord::from_double(mode, col, row).unwrap();
        assert_eq!(
            coord.as_double(mode).unwrap(),
            (col, row),
            "{} via {}",
            coord,
            mode
        );
    }
}

#[test]
fn test_float_offset_round_trip() {
    for (mode, col, row) in iproduct!(modes(ModeFamily::Offset), RANGE, RANGE) {
        let (col, row) = (col as f64, row as f64);
        let coord = HexCoord::from_offset(mode, col, row).unwrap();
        assert_eq!(coord.as_offset(mode).unwrap(), (col, row), "{}", mode);
    }
}

#[test]
fn test_distance_is_symmetric() {
    for (a, b) in iproduct!(coords(), coords()) {
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }
}

#[test]
fn test_distance_triangle_inequality() {
    let sample: Vec<_> = coords().step_by(7).collect();
    for (a, b, c) in iproduct!(&sample, &sample, &sample) {
        assert!(a.distance_to(*c) <= a.distance_to(*b) + b.distance_to(*c));
    }
}

#[test]
fn test_distance_counts_steps() {
    // walking neighbor to neighbor, every cell at distance `n` is first reached on step `n`
    let origin = HexCoord::<i32>::origin();
    let mut seen = HashSet::from([origin]);
    let mut frontier = vec![origin];
    for step in 1..=5 {
        frontier = frontier
            .iter()
            .flat_map(|cell| cell.neighbors())
            .filter(|cell| seen.insert(*cell))
            .collect();
        assert_eq!(frontier.len(), 6 * step as usize);
        assert!(frontier.iter().all(|cell| cell.distance_from_origin() == step));
    }
}

#[test]
fn test_rotation_closure() {
    for coord in coords() {
        let forward = (0..6).fold(coord, |c, _| c.rotate_next());
        let backward = (0..6).fold(coord, |c, _| c.rotate_back());
        assert_eq!(forward, coord);
        assert_eq!(backward, coord);
        assert_eq!(coord.rotate_next().rotate_back(), coord);
        assert_eq!(coord.rotate_next().distance_from_origin(), coord.distance_from_origin());
    }
}

#[test]
fn test_neighbors_are_distinct_unit_steps() {
    for coord in coords() {
        let neighbors = coord.neighbors();
        let distinct: HashSet<_> = neighbors.iter().collect();
        assert_eq!(distinct.len(), 6);
        assert!(neighbors.iter().all(|n| n.distance_to(coord) == 1));
    }
}

#[test]
fn test_fractional_neighbors_surround_rounded_cell() {
    for coord in coords() {
        let nudged = coord.cast::<f64>().unwrap() + HexCoord::new(0.3, -0.2);
        let cell = nudged.round();
        assert_eq!(cell, coord.cast::<f64>().unwrap());
        assert!(nudged
            .neighbors()
            .iter()
            .all(|n| n.distance_to(cell) == 1.0));
    }
}

#[test]
fn test_round_is_idempotent() {
    for coord in coords() {
        let float = coord.cast::<f64>().unwrap();
        assert_eq!(float.round(), float);
        assert_eq!(float.round().round(), float.round());
        assert_eq!(coord.round(), coord);
    }
}

#[test]
fn test_round_lands_on_grid() {
    for (x, y) in iproduct!(0..40, 0..40) {
        let coord = HexCoord::new(x as f64 / 7.0 - 3.0, y as f64 / 11.0 - 2.0);
        let cell = coord.round();
        assert!(cell.iter().all(|c| c.fract() == 0.0), "{}", cell);
        assert_eq!(cell.x() + cell.y() + cell.z(), 0.0);
        assert!(coord.distance_to(cell) <= 1.0, "{} rounded to {}", coord, cell);
    }
}

use proptest::prelude::*;

use u_route_nn::constructive::{nearest_neighbor_order, optimize, optimize_route};
use u_route_nn::distance::path_length;
use u_route_nn::models::{Located, Point};

fn coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    // Small integer grid so duplicates and exact ties show up often.
    prop::collection::vec((-5i32..=5, -5i32..=5), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(a, b)| (f64::from(a), f64::from(b)))
            .collect()
    })
}

fn to_points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn sorted_keys(points: &[Point]) -> Vec<(i64, i64)> {
    let mut keys: Vec<(i64, i64)> = points
        .iter()
        .map(|p| (p.lat() as i64, p.lng() as i64))
        .collect();
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn output_is_permutation_of_input(c in coords()) {
        let points = to_points(&c);
        let ordered = optimize(&points);
        prop_assert_eq!(ordered.len(), points.len());
        prop_assert_eq!(sorted_keys(&ordered), sorted_keys(&points));
    }

    #[test]
    fn order_is_index_permutation(c in coords()) {
        let points = to_points(&c);
        let mut order = nearest_neighbor_order(&points);
        order.sort_unstable();
        prop_assert_eq!(order, (0..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn first_point_is_anchor(c in coords()) {
        let points = to_points(&c);
        let ordered = optimize(&points);
        if let Some(first) = points.first() {
            prop_assert_eq!(ordered[0], *first);
        } else {
            prop_assert!(ordered.is_empty());
        }
    }

    #[test]
    fn repeated_calls_agree(c in coords()) {
        let points = to_points(&c);
        prop_assert_eq!(optimize(&points), optimize(&points));
    }

    #[test]
    fn input_left_untouched(c in coords()) {
        let points = to_points(&c);
        let snapshot = points.clone();
        let _ = optimize(&points);
        prop_assert_eq!(points, snapshot);
    }

    #[test]
    fn each_step_takes_a_nearest_remaining_point(c in coords()) {
        let points = to_points(&c);
        let order = nearest_neighbor_order(&points);
        for step in 1..order.len() {
            let last = &points[order[step - 1]];
            let chosen = last.distance_to(&points[order[step]]);
            for &other in &order[step + 1..] {
                let d = last.distance_to(&points[other]);
                prop_assert!(chosen <= d);
                // Ties go to the earlier input index.
                if d == chosen {
                    prop_assert!(order[step] < other);
                }
            }
        }
    }

    #[test]
    fn route_length_matches_path_length(c in coords()) {
        let points = to_points(&c);
        let route = optimize_route(&points);
        let direct = path_length(&optimize(&points));
        prop_assert!((route.total_distance() - direct).abs() < 1e-10);
    }
}

#[test]
fn scenario_already_ordered() {
    let points = to_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    assert_eq!(optimize(&points), points);
}

#[test]
fn scenario_reordering_required() {
    let points = to_points(&[(0.0, 0.0), (5.0, 5.0), (1.0, 1.0)]);
    assert_eq!(
        optimize(&points),
        to_points(&[(0.0, 0.0), (1.0, 1.0), (5.0, 5.0)])
    );
}

#[test]
fn scenario_duplicate_coordinates() {
    let points = to_points(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(nearest_neighbor_order(&points), vec![0, 1, 2]);
}

#[test]
fn empty_and_singleton() {
    let empty: Vec<Point> = Vec::new();
    assert!(optimize(&empty).is_empty());
    let one = vec![Point::new(4.0, 2.0)];
    assert_eq!(optimize(&one), one);
}

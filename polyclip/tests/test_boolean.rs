mod test_utils;

use polyclip::*;
use test_utils::{
    ModifiedPathSet, PathProperties, create_open_property_set, create_property_set,
    init_logger, inverted, property_sets_match,
};

fn rect(x: i64, y: i64, w: i64, h: i64) -> Path64 {
    path64![(x, y), (x + w, y), (x + w, y + h), (x, y + h)]
}

/// Runs `cliptype` with every start index rotation and direction of the subject, under both
/// orientation independent fill rules.
fn run_boolean_tests(
    subject: &Path64,
    clip: &Path64,
    cliptype: ClipType,
    expected_properties_set: &[PathProperties],
) {
    init_logger();
    ModifiedPathSet::new(subject, true).accept_closure(&mut |modified, state| {
        for fillrule in [FillRule::NonZero, FillRule::EvenOdd] {
            let mut clipper = Clipper64::new();
            clipper.add_subject(&[modified.clone()]).unwrap();
            clipper.add_clip(&[clip.clone()]).unwrap();
            let solution = clipper.execute(cliptype, fillrule);
            assert!(solution.succeeded);
            assert!(solution.open.is_empty());
            let result_properties = create_property_set(&solution.closed);
            assert!(
                property_sets_match(&result_properties, expected_properties_set),
                "property sets do not match, {:?} {:?}, modified state: {:?}",
                cliptype,
                fillrule,
                state
            );
        }
    });
}

macro_rules! declare_boolean_tests {
    ($($name:ident { $($value:expr => $expected:expr),+ $(,)? })*) => {
        $(
            #[test]
            fn $name() {
                $(
                    run_boolean_tests(&$value.0, &$value.1, $value.2, &$expected);
                )+
            }
        )+
    };
}

mod test_simple {
    use super::*;

    declare_boolean_tests!(
        overlapping_union {
            (rect(0, 0, 10, 10), rect(5, 5, 10, 10), ClipType::Union) =>
            [PathProperties::new(8, 175.0, 60.0, 0.0, 0.0, 15.0, 15.0)]
        }
        overlapping_intersection {
            (rect(0, 0, 10, 10), rect(5, 5, 10, 10), ClipType::Intersection) =>
            [PathProperties::new(4, 25.0, 20.0, 5.0, 5.0, 10.0, 10.0)]
        }
        overlapping_difference {
            (rect(0, 0, 10, 10), rect(5, 5, 10, 10), ClipType::Difference) =>
            [PathProperties::new(6, 75.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
        }
        disjoint_union {
            (rect(0, 0, 10, 10), rect(20, 0, 10, 10), ClipType::Union) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0),
             PathProperties::new(4, 100.0, 40.0, 20.0, 0.0, 30.0, 10.0)]
        }
        disjoint_intersection {
            (rect(0, 0, 10, 10), rect(20, 0, 10, 10), ClipType::Intersection) =>
            []
        }
        disjoint_difference {
            (rect(0, 0, 10, 10), rect(20, 0, 10, 10), ClipType::Difference) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
        }
        disjoint_xor {
            (rect(0, 0, 10, 10), rect(20, 0, 10, 10), ClipType::Xor) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0),
             PathProperties::new(4, 100.0, 40.0, 20.0, 0.0, 30.0, 10.0)]
        }
        enclosed_union {
            (rect(0, 0, 10, 10), rect(2, 2, 6, 6), ClipType::Union) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
        }
        enclosed_intersection {
            (rect(0, 0, 10, 10), rect(2, 2, 6, 6), ClipType::Intersection) =>
            [PathProperties::new(4, 36.0, 24.0, 2.0, 2.0, 8.0, 8.0)]
        }
        enclosed_difference {
            (rect(0, 0, 10, 10), rect(2, 2, 6, 6), ClipType::Difference) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0),
             PathProperties::new(4, -36.0, 24.0, 2.0, 2.0, 8.0, 8.0)]
        }
        enclosed_xor {
            (rect(0, 0, 10, 10), rect(2, 2, 6, 6), ClipType::Xor) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0),
             PathProperties::new(4, -36.0, 24.0, 2.0, 2.0, 8.0, 8.0)]
        }
        same_union {
            (rect(0, 0, 10, 10), rect(0, 0, 10, 10), ClipType::Union) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
        }
        same_intersection {
            (rect(0, 0, 10, 10), rect(0, 0, 10, 10), ClipType::Intersection) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
        }
        same_difference {
            (rect(0, 0, 10, 10), rect(0, 0, 10, 10), ClipType::Difference) =>
            []
        }
        same_xor {
            (rect(0, 0, 10, 10), rect(0, 0, 10, 10), ClipType::Xor) =>
            []
        }
        diamond_encloses_square {
            (rect(0, 0, 10, 10), path64![(5, -10), (20, 5), (5, 20), (-10, 5)], ClipType::Intersection) =>
            [PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
        }
    );
}

fn union_with(subjects: &[Path64], fillrule: FillRule) -> Paths64 {
    union_64(subjects, &[], fillrule).unwrap()
}

#[test]
fn fill_rules_on_nested_same_orientation() {
    let nested = [rect(0, 0, 10, 10), rect(2, 2, 6, 6)];
    let outer = PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0);
    let hole = PathProperties::new(4, -36.0, 24.0, 2.0, 2.0, 8.0, 8.0);

    let even_odd = create_property_set(&union_with(&nested, FillRule::EvenOdd));
    assert!(property_sets_match(&even_odd, &[outer, hole]));
    let non_zero = create_property_set(&union_with(&nested, FillRule::NonZero));
    assert!(property_sets_match(&non_zero, &[outer]));
    let positive = create_property_set(&union_with(&nested, FillRule::Positive));
    assert!(property_sets_match(&positive, &[outer]));
    assert!(union_with(&nested, FillRule::Negative).is_empty());

    // orientation dependent rules swap when the inputs are reversed
    let reversed = reverse_paths(&nested);
    assert!(union_with(&reversed, FillRule::Positive).is_empty());
    let negative = create_property_set(&union_with(&reversed, FillRule::Negative));
    assert!(property_sets_match(&negative, &[outer]));
}

#[test]
fn self_intersecting_bowtie() {
    let bowtie = path64![(0, 0), (10, 10), (10, 0), (0, 10)];
    let diag = 50f64.sqrt();
    let left = PathProperties::new(3, 25.0, 10.0 + 2.0 * diag, 0.0, 0.0, 5.0, 10.0);
    let right = PathProperties::new(3, 25.0, 10.0 + 2.0 * diag, 5.0, 0.0, 10.0, 10.0);

    for fillrule in [FillRule::EvenOdd, FillRule::NonZero] {
        let result = create_property_set(&union_with(&[bowtie.clone()], fillrule));
        assert!(property_sets_match(&result, &[left, right]), "{fillrule:?}");
    }

    // only the counter clockwise lobe has a positive winding count
    let result = create_property_set(&union_with(&[bowtie.clone()], FillRule::Positive));
    assert!(property_sets_match(&result, &[left]));
    let result = create_property_set(&union_with(&[bowtie], FillRule::Negative));
    assert!(property_sets_match(&result, &[right]));
}

#[test]
fn pentagram_fill_rules_differ() {
    // the center pentagon has a winding count of 2
    let star = path64![(0, 100), (59, -81), (-95, 31), (95, 31), (-59, -81)];
    let non_zero = union_with(&[star.clone()], FillRule::NonZero);
    let even_odd = union_with(&[star], FillRule::EvenOdd);
    assert_eq!(non_zero.len(), 1);
    assert!(is_positive(&non_zero[0]));

    let pentagon_area = area_of_paths(&non_zero) - area_of_paths(&even_odd);
    assert!(pentagon_area > 3000.0 && pentagon_area < 4000.0, "{pentagon_area}");
}

#[test]
fn self_intersecting_negative_union_keeps_vertex() {
    init_logger();
    // both inputs cross themselves, the subject's (642, 178) corner bounds a negative region
    let subject = path64![(642, 178), (600, 661), (100, 135), (726, 955)];
    let clip = path64![(970, 470), (890, 276), (253, 590), (584, 132)];
    let result = union_64(&[subject], &[clip], FillRule::Negative).unwrap();

    let corner = Point64::new(642, 178);
    assert!(result.iter().any(|p| p.contains(&corner)), "{result:?}");
    let total: f64 = result.iter().map(|p| area(p).abs()).sum();
    assert!(total > 87000.0 && total < 88100.0, "{total}");
}

#[test]
fn open_subject_clipped_by_square() {
    init_logger();
    let line = path64![(5, -5), (5, 15)];
    for subject in [line.clone(), inverted(&line)] {
        let mut clipper = Clipper64::new();
        clipper.add_open_subject(&[subject.clone()]).unwrap();
        clipper.add_clip(&[rect(0, 0, 10, 10)]).unwrap();

        let solution = clipper.execute(ClipType::Intersection, FillRule::NonZero);
        assert!(solution.closed.is_empty());
        let result = create_open_property_set(&solution.open);
        assert!(property_sets_match(
            &result,
            &[PathProperties::new(2, 0.0, 10.0, 5.0, 0.0, 5.0, 10.0)]
        ));

        let solution = clipper.execute(ClipType::Difference, FillRule::NonZero);
        assert!(solution.closed.is_empty());
        let result = create_open_property_set(&solution.open);
        assert!(property_sets_match(
            &result,
            &[
                PathProperties::new(2, 0.0, 5.0, 5.0, -5.0, 5.0, 0.0),
                PathProperties::new(2, 0.0, 5.0, 5.0, 10.0, 5.0, 15.0)
            ]
        ));
    }
}

#[test]
fn open_subject_kept_with_closed_subjects() {
    let mut clipper = Clipper64::new();
    clipper.add_subject(&[rect(0, 0, 10, 10)]).unwrap();
    clipper
        .add_open_subject(&[path64![(20, 0), (25, 10), (30, 0)]])
        .unwrap();
    clipper.add_clip(&[rect(-5, -5, 50, 50)]).unwrap();
    let solution = clipper.execute(ClipType::Intersection, FillRule::NonZero);
    assert_eq!(solution.closed.len(), 1);
    let result = create_open_property_set(&solution.open);
    assert!(property_sets_match(
        &result,
        &[PathProperties::new(3, 0.0, 2.0 * 125f64.sqrt(), 20.0, 0.0, 30.0, 10.0)]
    ));
}

#[test]
fn reverse_solution_flips_orientation() {
    let mut clipper = Clipper64::new();
    clipper.set_reverse_solution(true);
    clipper.add_subject(&[rect(0, 0, 10, 10)]).unwrap();
    clipper.add_clip(&[rect(2, 2, 6, 6)]).unwrap();
    let solution = clipper.execute(ClipType::Difference, FillRule::NonZero);
    let result = create_property_set(&solution.closed);
    assert!(property_sets_match(
        &result,
        &[
            PathProperties::new(4, -100.0, 40.0, 0.0, 0.0, 10.0, 10.0),
            PathProperties::new(4, 36.0, 24.0, 2.0, 2.0, 8.0, 8.0)
        ]
    ));
}

#[test]
fn collinear_points_preserved_on_request() {
    let with_midpoint = path64![(0, 0), (10, 0), (10, 5), (10, 10), (0, 10)];

    let mut clipper = Clipper64::new();
    assert!(clipper.preserve_collinear());
    clipper.add_subject(&[with_midpoint.clone()]).unwrap();
    let kept = clipper.execute(ClipType::Union, FillRule::NonZero);
    assert!(property_sets_match(
        &create_property_set(&kept.closed),
        &[PathProperties::new(5, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
    ));

    clipper.set_preserve_collinear(false);
    let removed = clipper.execute(ClipType::Union, FillRule::NonZero);
    assert!(property_sets_match(
        &create_property_set(&removed.closed),
        &[PathProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0)]
    ));
}

#[test]
fn degenerate_inputs_are_dropped() {
    let mut clipper = Clipper64::new();
    clipper
        .add_subject(&[
            path64![(0, 0), (10, 0), (20, 0)],
            path64![(5, 5)],
            path64![],
            path64![(0, 0), (0, 0), (0, 0)],
        ])
        .unwrap();
    let solution = clipper.execute(ClipType::Union, FillRule::NonZero);
    assert!(solution.succeeded);
    assert!(solution.is_empty());
}

#[test]
fn polytree_nesting() {
    init_logger();
    let nested = [rect(0, 0, 100, 100), rect(20, 20, 60, 60), rect(40, 40, 20, 20)];
    let tree = boolean_op_tree_64(ClipType::Union, FillRule::EvenOdd, &nested, &[]).unwrap();
    assert_eq!(tree.len(), 3);

    let outer = tree.children(PolyTree64::ROOT);
    assert_eq!(outer.len(), 1);
    let outer = outer[0];
    assert_eq!(tree.level(outer), 1);
    assert!(!tree.is_hole(outer));
    assert_eq!(area(tree.polygon(outer)), 10000.0);

    let hole = tree.children(outer)[0];
    assert!(tree.is_hole(hole));
    assert_eq!(tree.parent(hole), Some(outer));
    assert_eq!(area(tree.polygon(hole)), -3600.0);

    let island = tree.children(hole)[0];
    assert_eq!(tree.level(island), 3);
    assert!(!tree.is_hole(island));
    assert_eq!(area(tree.polygon(island)), 400.0);

    assert_eq!(tree.area(), 10000.0 - 3600.0 + 400.0);
    assert_eq!(tree.to_paths().len(), 3);
}

#[test]
fn polytree_siblings_and_open_paths() {
    let mut clipper = Clipper64::new();
    clipper
        .add_subject(&[rect(0, 0, 100, 100), rect(200, 0, 100, 100)])
        .unwrap();
    clipper.add_open_subject(&[path64![(-10, 40), (310, 60)]]).unwrap();
    clipper
        .add_clip(&[rect(10, 10, 20, 20), rect(210, 10, 20, 20)])
        .unwrap();
    let solution = clipper.execute_tree(ClipType::Difference, FillRule::NonZero);
    assert!(solution.succeeded);
    let tree = &solution.tree;
    assert_eq!(tree.children(PolyTree64::ROOT).len(), 2);
    for &outer in tree.children(PolyTree64::ROOT) {
        assert_eq!(tree.children(outer).len(), 1);
        assert!(tree.is_hole(tree.children(outer)[0]));
    }
    // subject edges never cut open paths and the polyline misses both clips
    let result = create_open_property_set(&solution.open);
    assert!(property_sets_match(
        &result,
        &[PathProperties::new(2, 0.0, 320f64.hypot(20.0), -10.0, 40.0, 310.0, 60.0)]
    ));
}

#[test]
fn one_call_functions_match_engine() {
    let a = [rect(0, 0, 10, 10)];
    let b = [rect(5, 5, 10, 10)];
    assert_eq!(area_of_paths(&intersect_64(&a, &b, FillRule::NonZero).unwrap()), 25.0);
    assert_eq!(area_of_paths(&union_64(&a, &b, FillRule::NonZero).unwrap()), 175.0);
    assert_eq!(area_of_paths(&difference_64(&a, &b, FillRule::NonZero).unwrap()), 75.0);
    assert_eq!(area_of_paths(&xor_64(&a, &b, FillRule::NonZero).unwrap()), 150.0);
    assert_eq!(
        boolean_op_64(ClipType::Union, FillRule::NonZero, &a, &b).unwrap(),
        union_64(&a, &b, FillRule::NonZero).unwrap()
    );
}

#[test]
fn out_of_range_coordinates_fail_before_work() {
    let huge = path64![(0, 0), (MAX_COORD, 0), (MAX_COORD + 1, 10)];
    assert_eq!(
        union_64(&[huge], &[], FillRule::NonZero),
        Err(ClipperError::CoordinateOutOfRange {
            x: MAX_COORD + 1,
            y: 10
        })
    );
}

#[test]
fn large_coordinates_are_exact() {
    let big = 1i64 << 50;
    let a = rect(-big, -big, 2 * big, 2 * big);
    let b = rect(0, 0, 2 * big, 2 * big);
    let result = intersect_64(&[a], &[b], FillRule::NonZero).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(bounds(&result[0]), Rect64::new(0, 0, big, big));
}

mod test_utils;

use polyclip::*;
use test_utils::{PathProperties, create_property_set, property_sets_match};

fn square_d(x: f64, y: f64, size: f64) -> PathD {
    pathd![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
}

#[test]
fn real_and_integer_domains_agree() {
    let subjects = [square_d(0.0, 0.0, 1.0)];
    let clips = [square_d(0.5, 0.5, 1.0)];
    let real = union_d(&subjects, &clips, FillRule::NonZero, 2).unwrap();

    let scaled_subjects = scale_paths_to_64(&subjects, 100.0).unwrap();
    let scaled_clips = scale_paths_to_64(&clips, 100.0).unwrap();
    let integer = union_64(&scaled_subjects, &scaled_clips, FillRule::NonZero).unwrap();

    assert_eq!(real.len(), integer.len());
    assert_eq!(scale_paths_to_64(&real, 100.0).unwrap(), integer);
    let properties = create_property_set(&real);
    assert!(property_sets_match(
        &properties,
        &[PathProperties::new(8, 1.75, 6.0, 0.0, 0.0, 1.5, 1.5)]
    ));
}

#[test]
fn precision_rounds_coordinates() {
    // 0.123 rounds to 0.12 at precision 2
    let tri = pathd![(0.0, 0.0), (1.0, 0.0), (0.123, 1.0)];
    let result = union_d(&[tri.clone()], &[], FillRule::NonZero, 2).unwrap();
    assert!(result[0].iter().any(|pt| pt.fuzzy_eq(PointD::new(0.12, 1.0))));

    let result = union_d(&[tri], &[], FillRule::NonZero, 3).unwrap();
    assert!(result[0].iter().any(|pt| pt.fuzzy_eq(PointD::new(0.123, 1.0))));
}

#[test]
fn every_operation_in_real_domain() {
    let a = [square_d(0.0, 0.0, 10.0)];
    let b = [square_d(5.0, 5.0, 10.0)];
    assert_fuzzy_eq!(area_of_paths(&intersect_d(&a, &b, FillRule::EvenOdd, 4).unwrap()), 25.0);
    assert_fuzzy_eq!(area_of_paths(&difference_d(&a, &b, FillRule::EvenOdd, 4).unwrap()), 75.0);
    assert_fuzzy_eq!(area_of_paths(&xor_d(&a, &b, FillRule::EvenOdd, 4).unwrap()), 150.0);
    assert_fuzzy_eq!(
        area_of_paths(&boolean_op_d(ClipType::Union, FillRule::EvenOdd, &a, &b, 4).unwrap()),
        175.0
    );
}

#[test]
fn tree_in_real_domain() {
    let mut clipper = ClipperD::new(3).unwrap();
    clipper.add_subject(&[square_d(0.0, 0.0, 10.0)]).unwrap();
    clipper.add_clip(&[square_d(2.5, 2.5, 5.0)]).unwrap();
    let solution = clipper.execute_tree(ClipType::Difference, FillRule::NonZero);
    assert!(solution.succeeded);
    let tree = solution.tree;
    assert_eq!(tree.len(), 2);
    let outer = tree.children(PolyTreeD::ROOT)[0];
    let hole = tree.children(outer)[0];
    assert!(tree.is_hole(hole));
    assert_fuzzy_eq!(area(tree.polygon(hole)), -25.0);
    assert_fuzzy_eq!(tree.area(), 75.0);
}

#[test]
fn overflow_is_reported_before_clipping() {
    let mut clipper = ClipperD::new(8).unwrap();
    // 1e12 * 1e8 exceeds the integer coordinate range
    let huge = square_d(0.0, 0.0, 1e12);
    assert!(matches!(
        clipper.add_subject(&[huge]),
        Err(ClipperError::ScaledCoordinateOutOfRange { .. })
    ));
    assert!(clipper.execute(ClipType::Union, FillRule::NonZero).is_empty());

    let infinite = pathd![(0.0, 0.0), (f64::INFINITY, 0.0), (0.0, 1.0)];
    assert!(union_d(&[infinite], &[], FillRule::NonZero, 2).is_err());
}

#[test]
fn open_paths_in_real_domain() {
    let mut clipper = ClipperD::default();
    clipper.add_open_subject(&[pathd![(0.5, -1.0), (0.5, 2.0)]]).unwrap();
    clipper.add_clip(&[square_d(0.0, 0.0, 1.0)]).unwrap();
    let solution = clipper.execute(ClipType::Intersection, FillRule::NonZero);
    assert_eq!(solution.open.len(), 1);
    let b = bounds(&solution.open[0]);
    assert_fuzzy_eq!(b.top, 0.0);
    assert_fuzzy_eq!(b.bottom, 1.0);
}

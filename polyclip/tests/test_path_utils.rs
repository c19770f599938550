use polyclip::*;

#[test]
fn area_orientation_fixture() {
    let square = path64![(0, 0), (100, 0), (100, 100), (0, 100)];
    assert_eq!(area(&square), 10000.0);
    assert!(is_positive(&square));

    let reversed = reverse_paths(&[square.clone()]);
    assert_eq!(area(&reversed[0]), -10000.0);
    assert!(!is_positive(&reversed[0]));

    // union output follows the same convention
    let union = union_64(&reversed, &[], FillRule::NonZero).unwrap();
    assert_eq!(area(&union[0]), 10000.0);
}

#[test]
fn real_domain_area_matches_integer() {
    let square = pathd![(0.0, 0.0), (1.5, 0.0), (1.5, 1.5), (0.0, 1.5)];
    assert_fuzzy_eq!(area(&square), 2.25);
    let scaled = scale_path_to_64(&square, 100.0).unwrap();
    assert_eq!(area(&scaled), 22500.0);
    let back = scale_path_to_d(&scaled, 0.01);
    for (a, b) in back.iter().zip(square.iter()) {
        assert!(a.fuzzy_eq(*b));
    }
}

#[test]
fn precision_limits() {
    assert!(precision_scale(MAX_PRECISION).is_ok());
    assert_eq!(
        precision_scale(MAX_PRECISION + 1),
        Err(ClipperError::PrecisionOutOfRange(MAX_PRECISION + 1))
    );
    assert_eq!(precision_scale(DEFAULT_PRECISION).unwrap(), 100.0);
}

#[test]
fn error_messages() {
    let err = ClipperError::PrecisionOutOfRange(9);
    assert_eq!(err.to_string(), "precision 9 is outside the supported range 0..=8");
    let err = ClipperError::InvalidOffsetDelta(f64::NAN);
    assert!(err.to_string().contains("NaN"));
}

#[test]
fn version_matches_package() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

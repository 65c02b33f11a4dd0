use fastnum::decimal::D128;
use stolpe::{PixelScale, Scale, scale::Linear};

#[test]
fn test_linear_scale_with_decimal_domain_and_normalized() {
    let scale = Linear::<D128, D128>::new(D128::from(0), D128::from(100));

    let normalized = scale.normalize(&D128::from(50));
    assert!((normalized - D128::from(0.5)).abs() < D128::from(1e-10));

    let denormalized = scale.denormalize(D128::from(0.5));
    assert!((denormalized - D128::from(50)).abs() < D128::from(1e-10));
}

#[test]
fn test_linear_scale_with_decimal_domain_f64_normalized() {
    let scale = Linear::<D128, f64>::new(D128::from(0), D128::from(100));

    let normalized: f64 = scale.normalize(&D128::from(25));
    assert!((normalized - 0.25).abs() < 1e-12);

    let denormalized = scale.denormalize(0.25);
    assert!((denormalized - D128::from(25)).abs() < D128::from(1e-10));
}

#[test]
fn test_pixel_scale_over_decimal_domain() {
    let scale = PixelScale::new(
        Linear::<D128, f64>::new(D128::from(0), D128::from(100)),
        40.0,
        580.0,
    );

    assert!((scale.apply(&D128::from(50)) - 310.0).abs() < 1e-9);

    let value = scale.invert(175.0);
    assert!((value - D128::from(25)).abs() < D128::from(1e-8));
}

#[test]
fn test_reversed_pixel_range_over_decimal_domain() {
    let scale = PixelScale::new(
        Linear::<D128, f64>::new(D128::from(0), D128::from(3)),
        280.0,
        20.0,
    );

    assert!((scale.apply(&D128::from(0)) - 280.0).abs() < 1e-9);
    assert!((scale.apply(&D128::from(3)) - 20.0).abs() < 1e-9);
}

use sproing::{Spring, Vec2};

#[test]
fn force_is_antisymmetric() {
    let springs = [Spring::new(10.0f64), Spring::new(0.0), Spring::new(250.0)];
    let points = [
        (Vec2::new(0.0, 0.0), Vec2::new(20.0, 5.0)),
        (Vec2::new(-3.0, 7.0), Vec2::new(4.0, -1.5)),
        (Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0)),
    ];
    for s in &springs {
        for &(a, b) in &points {
            let ab = s.force(a, b, 0.1);
            let ba = s.force(b, a, 0.1);
            assert!((ab.x + ba.x).abs() < 1e-12, "{:?} vs {:?}", ab, ba);
            assert!((ab.y + ba.y).abs() < 1e-12, "{:?} vs {:?}", ab, ba);
        }
    }
}

#[test]
fn rest_length_gives_zero_force() {
    let a = Vec2::new(10.0f32, 10.0);
    let b = Vec2::new(13.0, 14.0);
    let s = Spring::new(5.0);
    let f = s.force(a, b, 0.7);
    assert!(f.length() < 1e-6);
}

#[test]
fn magnitude_is_stiffness_times_extension() {
    let s = Spring::new(100.0f64);
    let f = s.force(Vec2::new(0.0, 0.0), Vec2::new(0.0, 130.0), 0.1);
    assert!((f.length() - 3.0).abs() < 1e-9);
    // Stretched: pulled towards b.
    assert!(f.y > 0.0);
}

#[test]
fn width_is_cosmetic() {
    let a = Vec2::new(0.0f32, 0.0);
    let b = Vec2::new(0.0, 20.0);
    let thin = Spring::new(10.0);
    let thick = Spring::new(10.0).with_width(4.0);
    assert_eq!(thin.force(a, b, 0.5), thick.force(a, b, 0.5));
    assert_eq!(thick.width(), 4.0);
}

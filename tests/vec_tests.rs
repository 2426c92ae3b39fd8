use sproing::Vec2;

#[test]
fn divide_by_zero_is_zero_vector() {
    for v in [Vec2::new(1.0f32, 2.0), Vec2::new(-7.5, 0.25), Vec2::zero()] {
        assert_eq!(v.div(0.0), Vec2::zero());
    }
}

#[test]
fn unit_of_zero_is_zero_vector() {
    let u = Vec2::<f64>::zero().unit();
    assert_eq!(u, Vec2::zero());
    assert!(!u.x.is_nan() && !u.y.is_nan());
}

#[test]
fn subtract_then_add_round_trips() {
    let pairs = [
        (Vec2::new(1.0f64, 2.0), Vec2::new(3.0, -4.0)),
        (Vec2::new(-100.5, 0.0), Vec2::new(0.25, 99.0)),
        (Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)),
    ];
    for (a, b) in pairs {
        let back = (a - b) + b;
        assert!((back.x - a.x).abs() < 1e-12);
        assert!((back.y - a.y).abs() < 1e-12);
    }
}

#[test]
fn in_place_mutators() {
    let mut v = Vec2::new(1.0f32, 1.0);
    v.add_assign_vec(Vec2::new(2.0, 3.0));
    assert_eq!(v, Vec2::new(3.0, 4.0));
    v.sub_assign_vec(Vec2::new(1.0, 1.0));
    assert_eq!(v, Vec2::new(2.0, 3.0));
    v.mul_assign_components(Vec2::new(2.0, -1.0));
    assert_eq!(v, Vec2::new(4.0, -3.0));
    v.div_assign_components(Vec2::new(4.0, 3.0));
    assert_eq!(v, Vec2::new(1.0, -1.0));
    v.replace_with(Vec2::new(9.0, 8.0));
    assert_eq!(v, Vec2::new(9.0, 8.0));
    v.clear();
    assert_eq!(v, Vec2::zero());
}

#[test]
fn pure_ops_leave_operand_untouched() {
    let v = Vec2::new(3.0f32, 4.0);
    let scaled = v.scale(2.0);
    let halved = v.div(2.0);
    assert_eq!(v, Vec2::new(3.0, 4.0));
    assert_eq!(scaled, Vec2::new(6.0, 8.0));
    assert_eq!(halved, Vec2::new(1.5, 2.0));
}

#[test]
fn unit_has_length_one() {
    let u = Vec2::new(3.0f64, -4.0).unit();
    assert!((u.length() - 1.0).abs() < 1e-12);
    assert!((u.x - 0.6).abs() < 1e-12);
    assert!((u.y + 0.8).abs() < 1e-12);
}

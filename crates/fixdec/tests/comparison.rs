use fixdec::Decimal;

fn d2(value: f64) -> Decimal<2> {
    Decimal::from_f64(value).unwrap()
}

#[test]
fn equality() {
    assert_eq!(d2(3.0), d2(3.0));
    assert_eq!(d2(3.0), d2(3.00));
    assert_eq!(Decimal::<2>::from_f32(3.00).unwrap(), d2(3.00));
    assert_eq!(d2(2.999), d2(3.001));
    assert_eq!(d2(0.0), d2(0.0));
    assert_eq!(d2(-1.0), d2(-1.0));

    assert_ne!(d2(2.0), d2(3.0));
    assert_ne!(d2(3.0), d2(3.01));
    assert_ne!(Decimal::<2>::from_f32(4.00).unwrap(), d2(3.00));
    assert_ne!(d2(2.99), d2(3.01));
    assert_ne!(d2(1.0), d2(0.0));
    assert_ne!(d2(-2.0), d2(-1.0));
}

#[test]
fn less_than() {
    assert!(d2(3.0) < d2(4.57));
    assert!(d2(0.0) < d2(5.0));
    assert!(d2(-1.0) < d2(0.0));
    assert!(!(d2(4.57) < d2(4.57)));
    assert!(!(d2(3.0) < d2(3.0)));
    assert!(!(d2(5.0) < d2(3.0)));
}

#[test]
fn less_than_or_equal() {
    assert!(d2(3.0) <= d2(4.57));
    assert!(d2(0.0) <= d2(5.0));
    assert!(d2(-1.0) <= d2(0.0));
    assert!(d2(4.57) <= d2(4.57));
    assert!(d2(3.0) <= d2(3.0));
    assert!(!(d2(5.0) <= d2(3.0)));
}

#[test]
fn greater_than() {
    assert!(d2(4.57) > d2(3.0));
    assert!(d2(5.0) > d2(0.0));
    assert!(d2(0.0) > d2(-1.0));
    assert!(!(d2(4.57) > d2(4.57)));
    assert!(!(d2(3.0) > d2(3.0)));
    assert!(!(d2(3.0) > d2(5.0)));
}

#[test]
fn greater_than_or_equal() {
    assert!(d2(4.57) >= d2(3.0));
    assert!(d2(5.0) >= d2(0.0));
    assert!(d2(0.0) >= d2(-1.0));
    assert!(d2(4.57) >= d2(4.57));
    assert!(d2(3.0) >= d2(3.0));
    assert!(!(d2(3.0) >= d2(5.0)));
}

#[test]
fn sorting_follows_value() {
    let mut values = vec![d2(1.5), d2(-2.25), d2(0.0), d2(-0.01)];
    values.sort();

    assert_eq!(values, vec![d2(-2.25), d2(-0.01), d2(0.0), d2(1.5)]);
}

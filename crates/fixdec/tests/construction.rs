use fixdec::prelude::*;

fn d<const DIGITS: u32>(value: f64) -> Decimal<DIGITS> {
    Decimal::from_f64(value).unwrap()
}

#[test]
fn zero_digit_values_have_unit_scalar() {
    for (value, scaled) in [(0, 0), (1, 1), (-1, -1)] {
        let decimal = Decimal::<0>::from_int(value).unwrap();

        assert_eq!(Decimal::<0>::scalar(), 1);
        assert_eq!(decimal.scaled(), scaled);
    }
}

#[test]
fn scalar_grows_with_digits() {
    assert_eq!(Decimal::<0>::scalar(), 1);
    assert_eq!(Decimal::<1>::scalar(), 10);
    assert_eq!(Decimal::<2>::scalar(), 100);

    assert_eq!(Decimal::<0>::from_int(1).unwrap().scaled(), 1);
    assert_eq!(Decimal::<1>::from_int(1).unwrap().scaled(), 10);
    assert_eq!(Decimal::<2>::from_int(1).unwrap().scaled(), 100);

    assert_eq!(Decimal::<0>::from_int(-1).unwrap().scaled(), -1);
    assert_eq!(Decimal::<1>::from_int(-1).unwrap().scaled(), -10);
    assert_eq!(Decimal::<2>::from_int(-1).unwrap().scaled(), -100);

    assert_eq!(Decimal::<2>::from_int(0).unwrap().scaled(), 0);
}

#[test]
fn shape_parameters_are_reported() {
    assert_eq!(Decimal::<0>::digits(), 0);
    assert_eq!(Decimal::<2>::digits(), 2);
    assert_eq!(Decimal::<2>::base(), 10);

    assert_eq!(Decimal::<4, u8, 2>::digits(), 4);
    assert_eq!(Decimal::<4, u8, 2>::base(), 2);
    assert_eq!(Decimal::<3, i64, 16>::base(), 16);
}

#[test]
fn floats_round_to_nearest_scaled_value() {
    assert_eq!(d::<2>(1.23).scaled(), 123);
    assert_eq!(d::<3>(1.23).scaled(), 1_230);
    assert_eq!(d::<4>(1.23).scaled(), 12_300);

    assert_eq!(d::<2>(-1.23).scaled(), -123);

    assert_eq!(d::<2>(1.234_567).scaled(), 123);
    assert_eq!(d::<2>(1.239_999).scaled(), 124);
}

#[test]
fn fewer_digits_widen_exactly() {
    assert_eq!(d::<3>(1.23).rescale::<4>().unwrap().scaled(), 12_300);
    assert_eq!(d::<2>(1.23).rescale::<4>().unwrap().scaled(), 12_300);
    assert_eq!(d::<1>(1.23).rescale::<4>().unwrap().scaled(), 12_000);
}

#[test]
fn representation_can_change() {
    let narrow = Decimal::<2, i16>::from_f64(1.23).unwrap();
    let wide: Decimal<2, i64> = narrow.with_repr().unwrap();

    assert_eq!(wide.scaled(), 123);
}

#[test]
fn integer_conversion_truncates() {
    assert_eq!(d::<2>(5.0).to_int::<i32>(), Some(5));
    assert_eq!(d::<2>(5.43).to_int::<i32>(), Some(5));
    assert_eq!(d::<2>(-5.43).to_int::<i32>(), Some(-5));
    assert_eq!(d::<2>(0.0).to_int::<i32>(), Some(0));

    assert_eq!(d::<2>(5.0).to_int::<u32>(), Some(5));
    assert_eq!(d::<2>(5.43).to_int::<u32>(), Some(5));
    assert_eq!(d::<2>(-5.43).to_int::<u32>(), None);
}

#[test]
#[allow(clippy::float_cmp)]
fn float_conversion_divides_by_scalar() {
    assert_eq!(d::<2>(5.0).to_f64(), 5.0);
    assert_eq!(d::<2>(5.43).to_f64(), 5.43);
    assert_eq!(d::<2>(-5.43).to_f64(), -5.43);
    assert_eq!(d::<2>(5.4321).to_f64(), 5.43);
    assert_eq!(d::<2>(5.4399).to_f64(), 5.44);
    assert_eq!(d::<2>(0.0).to_f64(), 0.0);

    assert_eq!(d::<2>(5.0).to_f32(), 5.0f32);
    assert_eq!(d::<2>(5.43).to_f32(), 5.43f32);
    assert_eq!(d::<2>(-5.43).to_f32(), -5.43f32);
    assert_eq!(d::<2>(5.4321).to_f32(), 5.43f32);
    assert_eq!(d::<2>(5.4399).to_f32(), 5.44f32);
    assert_eq!(d::<2>(0.0).to_f32(), 0.0f32);
}

#[test]
fn f32_and_f64_sources_agree() {
    assert_eq!(
        Decimal::<2>::from_f32(3.00f32).unwrap(),
        Decimal::<2>::from_f64(3.00).unwrap()
    );
    assert_eq!(
        Decimal::<2>::try_from(5.43f32).unwrap(),
        Decimal::<2>::try_from(5.43f64).unwrap()
    );
}

use fixdec::DecimalError;
use fixdec_testing_consumer::{sample_line, total};

#[test]
fn sample_line_renders() {
    assert_eq!(sample_line().unwrap(), "5 7.0 4.06 4.060 0.00000 -3.45 -0.20");
}

#[test]
fn totals_exactly() {
    let sum = total(&["0.10", "0.20", "19.99"]).unwrap();

    assert_eq!(sum.to_string(), "20.29");
}

#[test]
fn total_surfaces_parse_errors() {
    assert!(matches!(total(&["1.005"]), Err(DecimalError::Parse(_))));
}
